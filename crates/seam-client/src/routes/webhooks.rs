use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    #[instrument(skip(self))]
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>> {
        let request = RequestDescriptor::get("/webhooks/list");
        self.request_payload::<WebhooksResponse>(request)
            .await
            .map(|r| r.webhooks)
    }

    #[instrument(skip(self, params), fields(webhook_id = %params.webhook_id))]
    pub async fn get_webhook(&self, params: &WebhookRequest) -> Result<Webhook> {
        let request = RequestDescriptor::get("/webhooks/get").with_params(params)?;
        self.request_payload::<WebhookResponse>(request)
            .await
            .map(|r| r.webhook)
    }

    /// Register a URL to receive events; the result carries the signing secret
    #[instrument(skip(self, params), fields(url = %params.url))]
    pub async fn create_webhook(&self, params: &CreateWebhookRequest) -> Result<Webhook> {
        let request = RequestDescriptor::post("/webhooks/create").with_params(params)?;
        self.request_payload::<WebhookResponse>(request)
            .await
            .map(|r| r.webhook)
    }

    #[instrument(skip(self, params), fields(webhook_id = %params.webhook_id))]
    pub async fn delete_webhook(&self, params: &WebhookRequest) -> Result<()> {
        let request = RequestDescriptor::post("/webhooks/delete").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
