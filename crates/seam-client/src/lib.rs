//! Seam Client Library
//!
//! Typed async client for the Seam smart-access platform: devices, locks,
//! access codes, thermostats, noise sensors, webhooks and the rest of the
//! HTTP API.
//!
//! # Example
//!
//! ```rust,no_run
//! use seam_client::{CreateAccessCodeRequest, ListDevicesRequest, SeamClient};
//!
//! #[tokio::main]
//! async fn main() -> seam_client::Result<()> {
//!     // Reads SEAM_API_KEY, SEAM_API_URL and SEAM_WORKSPACE_ID
//!     let seam = SeamClient::from_env()?;
//!
//!     let devices = seam.list_devices(&ListDevicesRequest::default()).await?;
//!     let front_door = &devices[0];
//!
//!     // Time-bound code for a weekend stay
//!     let code = seam
//!         .create_access_code(
//!             &CreateAccessCodeRequest::scheduled(
//!                 &front_door.device_id,
//!                 "2024-06-01T15:00:00Z",
//!                 "2024-06-03T11:00:00Z",
//!             )
//!             .with_name("Guest"),
//!         )
//!         .await?;
//!     println!("{:?}", code.code);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! A client authenticates with exactly one of an API key or a client session
//! token, both sent as a bearer token. A workspace id may only accompany a
//! client session token or a non-`seam_` key. Client session tokens can be
//! minted without a client via [`SeamClient::get_client_session_token`].
//!
//! # Errors
//!
//! Every operation returns [`SeamError`]. Rejected input surfaces as
//! [`SeamError::MalformedInput`] with the platform's validation details,
//! other API failures as [`SeamError::Api`], and failures without a response
//! as [`SeamError::Transport`].
//!
//! # Testing
//!
//! The `testing` module runs an axum router on a local port and hands back a
//! client pointed at it:
//!
//! ```rust,ignore
//! use seam_client::testing::TestServer;
//!
//! let server = TestServer::start(mock_router()).await?;
//! let devices = server.client.list_devices(&Default::default()).await?;
//! ```

mod client;
mod config;
mod error;
mod http;
mod retry;
mod routes;
pub mod testing;
mod types;

pub use client::{
    session_key_header, ClientSessionTokenOptions, SeamClient, API_KEY_HEADER,
    CLIENT_SESSION_CREATE_PATH, PUBLISHABLE_KEY_HEADER, REQUEST_ID_HEADER,
    USER_IDENTIFIER_KEY_HEADER,
};
pub use config::{
    default_user_agent, resolve_config, Credential, EnvDefaults, ResolvedConfig,
    SeamClientOptions, API_KEY_ENV, API_KEY_PREFIX, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT, ENDPOINT_ENV, PUBLISHABLE_KEY_PREFIX, WORKSPACE_HEADER, WORKSPACE_ID_ENV,
};
pub use error::{ApiError, ErrorBody, Result, SeamError, INVALID_INPUT_ERROR_TYPE};
pub use http::RequestDescriptor;
pub use retry::{is_idempotent, RetryConfig};
pub use types::*;

// Re-export for callers building custom requests
pub use reqwest::Method;
