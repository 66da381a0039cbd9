//! Test utilities for seam-client
//!
//! Runs an axum router standing in for the Seam API on a local port, with a
//! [`SeamClient`] already pointed at it.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{Result, RetryConfig, SeamClient, SeamClientOptions, SeamError};

/// API key used by [`TestServer::start`]
pub const TEST_API_KEY: &str = "seam_test_api_key";

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: SeamClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` and build a client authenticated with [`TEST_API_KEY`]
    ///
    /// # Example
    ///
    /// ```ignore
    /// use axum::{routing::get, Json, Router};
    /// use seam_client::testing::TestServer;
    ///
    /// let router = Router::new().route(
    ///     "/workspaces/get",
    ///     get(|| async { Json(json!({"ok": true, "workspace": workspace})) }),
    /// );
    /// let server = TestServer::start(router).await?;
    /// let workspace = server.client.get_workspace().await?;
    /// ```
    pub async fn start<S>(router: axum::Router<S>) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with_options(router, test_options()).await
    }

    /// Serve `router` and build a client from `options`.
    ///
    /// The endpoint is always the test server; the environment is never
    /// consulted.
    pub async fn start_with_options<S>(
        router: axum::Router<S>,
        options: SeamClientOptions,
    ) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| SeamError::Configuration(format!("Failed to bind test server: {}", e)))?;
        let addr = listener
            .local_addr()
            .map_err(|e| SeamError::Configuration(format!("Failed to bind test server: {}", e)))?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let router: axum::Router = router.into();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let options = options.endpoint(format!("http://{}", addr));
        let client = SeamClient::with_options_and_env(options, &Default::default())?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &SeamClient {
        &self.client
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Options used by [`TestServer::start`]: the test key, short timeouts and
/// near-instant retries
pub fn test_options() -> SeamClientOptions {
    SeamClientOptions::from(TEST_API_KEY)
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(2))
        .retry(RetryConfig::default().with_base_delay(Duration::from_millis(1)))
}
