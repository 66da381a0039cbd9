//! Access code commands - list, create and delete codes on a device

use anyhow::{bail, Result};
use seam_client::{
    CreateAccessCodeRequest, DeleteAccessCodeRequest, ListAccessCodesRequest, SeamClient,
};

use crate::output::{AccessCodeRow, OutputContext};

pub async fn list(client: &SeamClient, device_id: &str, ctx: &OutputContext) -> Result<()> {
    let codes = client
        .list_access_codes(&ListAccessCodesRequest::for_device(device_id))
        .await?;

    let rows: Vec<AccessCodeRow> = codes.iter().map(AccessCodeRow::from).collect();
    ctx.print(&rows);
    Ok(())
}

/// Create an ongoing code, or a time-bound one when both bounds are given
pub async fn create(
    client: &SeamClient,
    device_id: &str,
    name: Option<String>,
    code: Option<String>,
    starts_at: Option<String>,
    ends_at: Option<String>,
    ctx: &OutputContext,
) -> Result<()> {
    let mut request = match (starts_at, ends_at) {
        (Some(starts_at), Some(ends_at)) => {
            CreateAccessCodeRequest::scheduled(device_id, starts_at, ends_at)
        }
        (None, None) => CreateAccessCodeRequest::ongoing(device_id),
        _ => bail!("--starts-at and --ends-at must be given together"),
    };
    request.name = name;
    request.code = code;

    let created = client.create_access_code(&request).await?;

    ctx.success(&format!("Created access code {}", created.access_code_id));
    ctx.print_one(&AccessCodeRow::from(&created));
    Ok(())
}

pub async fn delete(client: &SeamClient, access_code_id: &str, ctx: &OutputContext) -> Result<()> {
    let attempt = client
        .delete_access_code(&DeleteAccessCodeRequest::new(access_code_id))
        .await?;

    let pairs = [
        ("Action attempt", attempt.action_attempt_id.clone()),
        ("Status", attempt.status.clone()),
    ];
    ctx.print_kv(&pairs, &attempt);
    if attempt.is_pending() {
        ctx.warn("Deletion is in progress on the device");
    }
    Ok(())
}
