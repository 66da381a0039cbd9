//! Events command

use anyhow::Result;
use seam_client::{ListEventsRequest, SeamClient};

use crate::output::{EventRow, OutputContext};

/// List events since a timestamp, optionally for one device
pub async fn list(
    client: &SeamClient,
    since: Option<String>,
    device_id: Option<String>,
    ctx: &OutputContext,
) -> Result<()> {
    let params = ListEventsRequest {
        since: since.map(Into::into),
        device_id,
        ..Default::default()
    };
    let events = client.list_events(&params).await?;

    let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
    ctx.print(&rows);
    Ok(())
}
