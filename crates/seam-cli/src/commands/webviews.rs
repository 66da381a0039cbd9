//! Webviews command - start a Connect Webview flow

use anyhow::Result;
use seam_client::{CreateConnectWebviewRequest, SeamClient};

use crate::output::OutputContext;

pub async fn create(
    client: &SeamClient,
    providers: Vec<String>,
    redirect_url: Option<String>,
    ctx: &OutputContext,
) -> Result<()> {
    let request = CreateConnectWebviewRequest {
        accepted_providers: (!providers.is_empty()).then_some(providers),
        custom_redirect_url: redirect_url,
        ..Default::default()
    };
    let webview = client.create_connect_webview(&request).await?;

    let pairs = [
        ("ID", webview.connect_webview_id.clone()),
        ("URL", webview.url.clone().unwrap_or_default()),
        ("Status", webview.status.clone().unwrap_or_default()),
    ];
    ctx.print_kv(&pairs, &webview);
    Ok(())
}
