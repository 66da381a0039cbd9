//! Session token command - exchange a key for a client session token

use anyhow::{bail, Result};
use seam_client::{ApiResponse, ClientSessionTokenOptions, SeamClient};

use crate::output::OutputContext;

pub async fn session_token(
    key: &str,
    user_identifier_key: Option<String>,
    endpoint: Option<String>,
    ctx: &OutputContext,
) -> Result<()> {
    let mut options = ClientSessionTokenOptions::new(key);
    options.user_identifier_key = user_identifier_key;
    options.endpoint = endpoint;

    match SeamClient::get_client_session_token(options).await? {
        ApiResponse::Success(response) => {
            let session = response.payload.client_session;
            let pairs = [
                ("Client session", session.client_session_id.clone()),
                ("Token", session.token.clone().unwrap_or_default()),
                (
                    "User identifier key",
                    session.user_identifier_key.clone().unwrap_or_default(),
                ),
            ];
            ctx.print_kv(&pairs, &session);
            Ok(())
        }
        ApiResponse::Errored(errored) => {
            match errored.error.error_type {
                Some(error_type) => bail!("{} ({})", errored.error.message, error_type),
                None => bail!("{}", errored.error.message),
            }
        }
    }
}
