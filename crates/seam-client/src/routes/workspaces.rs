use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    #[instrument(skip(self))]
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let request = RequestDescriptor::get("/workspaces/list");
        self.request_payload::<WorkspacesResponse>(request)
            .await
            .map(|r| r.workspaces)
    }

    /// The workspace the client's credential is scoped to
    #[instrument(skip(self))]
    pub async fn get_workspace(&self) -> Result<Workspace> {
        let request = RequestDescriptor::get("/workspaces/get");
        self.request_payload::<WorkspaceResponse>(request)
            .await
            .map(|r| r.workspace)
    }

    /// Wipe a sandbox workspace back to its seeded devices
    #[instrument(skip(self))]
    pub async fn reset_sandbox_workspace(&self) -> Result<()> {
        let request = RequestDescriptor::post("/workspaces/reset_sandbox");
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
