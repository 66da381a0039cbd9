use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    #[instrument(skip(self))]
    pub async fn list_connect_webviews(&self) -> Result<Vec<ConnectWebview>> {
        let request = RequestDescriptor::get("/connect_webviews/list");
        self.request_payload::<ConnectWebviewsResponse>(request)
            .await
            .map(|r| r.connect_webviews)
    }

    #[instrument(skip(self, params), fields(connect_webview_id = %params.connect_webview_id))]
    pub async fn get_connect_webview(
        &self,
        params: &ConnectWebviewRequest,
    ) -> Result<ConnectWebview> {
        let request = RequestDescriptor::get("/connect_webviews/get").with_params(params)?;
        self.request_payload::<ConnectWebviewResponse>(request)
            .await
            .map(|r| r.connect_webview)
    }

    /// Start a hosted flow for an end user to link their device account
    #[instrument(skip(self, params))]
    pub async fn create_connect_webview(
        &self,
        params: &CreateConnectWebviewRequest,
    ) -> Result<ConnectWebview> {
        let request = RequestDescriptor::post("/connect_webviews/create").with_params(params)?;
        self.request_payload::<ConnectWebviewResponse>(request)
            .await
            .map(|r| r.connect_webview)
    }

    #[instrument(skip(self, params), fields(connect_webview_id = %params.connect_webview_id))]
    pub async fn delete_connect_webview(&self, params: &ConnectWebviewRequest) -> Result<()> {
        let request = RequestDescriptor::delete("/connect_webviews/delete").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
