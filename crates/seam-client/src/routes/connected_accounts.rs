use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    #[instrument(skip(self))]
    pub async fn list_connected_accounts(&self) -> Result<Vec<ConnectedAccount>> {
        let request = RequestDescriptor::get("/connected_accounts/list");
        self.request_payload::<ConnectedAccountsResponse>(request)
            .await
            .map(|r| r.connected_accounts)
    }

    /// Get a connected account by id or by email
    #[instrument(skip(self, params))]
    pub async fn get_connected_account(
        &self,
        params: &ConnectedAccountRequest,
    ) -> Result<ConnectedAccount> {
        let request = RequestDescriptor::get("/connected_accounts/get").with_params(params)?;
        self.request_payload::<ConnectedAccountResponse>(request)
            .await
            .map(|r| r.connected_account)
    }

    /// Unlink an account; its devices disappear with it
    #[instrument(skip(self, params))]
    pub async fn delete_connected_account(&self, params: &ConnectedAccountRequest) -> Result<()> {
        let request =
            RequestDescriptor::delete("/connected_accounts/delete").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
