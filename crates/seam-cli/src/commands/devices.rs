//! Devices commands - list and inspect devices

use anyhow::Result;
use seam_client::{DeviceSelector, ListDevicesRequest, SeamClient};

use crate::output::{DeviceRow, OutputContext};

/// List devices, optionally filtered
pub async fn list(
    client: &SeamClient,
    device_type: Option<String>,
    connected_account_id: Option<String>,
    limit: Option<u32>,
    ctx: &OutputContext,
) -> Result<()> {
    let params = ListDevicesRequest {
        device_type,
        connected_account_id,
        limit,
        ..Default::default()
    };
    let devices = client.list_devices(&params).await?;

    let rows: Vec<DeviceRow> = devices.iter().map(DeviceRow::from).collect();
    ctx.print(&rows);
    Ok(())
}

/// Show one device
pub async fn get(client: &SeamClient, device_id: &str, ctx: &OutputContext) -> Result<()> {
    let device = client.get_device(&DeviceSelector::id(device_id)).await?;

    let mut pairs = vec![
        ("ID", device.device_id.clone()),
        ("Type", device.device_type.clone()),
        ("Name", device.name().unwrap_or("-").to_string()),
        ("Capabilities", device.capabilities_supported.join(", ")),
    ];
    if let Some(account) = &device.connected_account_id {
        pairs.push(("Connected account", account.clone()));
    }
    if let Some(online) = device.is_online() {
        pairs.push(("Online", online.to_string()));
    }
    if let Some(locked) = device.is_locked() {
        pairs.push(("Locked", locked.to_string()));
    }
    if !device.errors.is_empty() {
        pairs.push(("Errors", device.errors.len().to_string()));
    }

    ctx.print_kv(&pairs, &device);
    Ok(())
}
