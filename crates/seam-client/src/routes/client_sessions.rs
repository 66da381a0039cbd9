//! Client sessions
//!
//! A client session scopes a publishable key to one end user. See also
//! [`SeamClient::get_client_session_token`] for the exchange that needs no
//! secret API key.

use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    #[instrument(skip(self, params), fields(user_identifier_key = %params.user_identifier_key))]
    pub async fn create_client_session(
        &self,
        params: &CreateClientSessionRequest,
    ) -> Result<ClientSession> {
        let request = RequestDescriptor::post("/client_sessions/create").with_params(params)?;
        self.request_payload::<ClientSessionResponse>(request)
            .await
            .map(|r| r.client_session)
    }

    /// Return the existing session for the user identifier key or create one
    #[instrument(skip(self, params), fields(user_identifier_key = %params.user_identifier_key))]
    pub async fn get_or_create_client_session(
        &self,
        params: &CreateClientSessionRequest,
    ) -> Result<ClientSession> {
        let request =
            RequestDescriptor::put("/client_sessions/get_or_create").with_params(params)?;
        self.request_payload::<ClientSessionResponse>(request)
            .await
            .map(|r| r.client_session)
    }

    #[instrument(skip(self, params))]
    pub async fn list_client_sessions(
        &self,
        params: &ListClientSessionsRequest,
    ) -> Result<Vec<ClientSession>> {
        let request = RequestDescriptor::get("/client_sessions/list").with_params(params)?;
        self.request_payload::<ClientSessionsResponse>(request)
            .await
            .map(|r| r.client_sessions)
    }

    #[instrument(skip(self, params))]
    pub async fn get_client_session(
        &self,
        params: &GetClientSessionRequest,
    ) -> Result<ClientSession> {
        let request = RequestDescriptor::get("/client_sessions/get").with_params(params)?;
        self.request_payload::<ClientSessionResponse>(request)
            .await
            .map(|r| r.client_session)
    }

    #[instrument(skip(self))]
    pub async fn delete_client_session(&self, client_session_id: &str) -> Result<()> {
        let params = DeleteClientSessionRequest {
            client_session_id: client_session_id.to_string(),
        };
        let request = RequestDescriptor::delete("/client_sessions/delete").with_params(&params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
