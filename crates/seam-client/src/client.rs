//! Seam HTTP client core

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::{
    header_value, resolve_config, EnvDefaults, ResolvedConfig, SeamClientOptions, API_KEY_PREFIX,
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, PUBLISHABLE_KEY_PREFIX,
};
use crate::error::{error_from_body, normalize_error, ApiError, ErrorBody, Result, SeamError};
use crate::http::RequestDescriptor;
use crate::retry::RetryConfig;
use crate::types::{ApiResponse, ClientSessionResponse, ErroredResponse, SuccessfulResponse};

/// Response header carrying the platform's request correlation id
pub const REQUEST_ID_HEADER: &str = "seam-request-id";

/// Path of the client session token exchange
pub const CLIENT_SESSION_CREATE_PATH: &str = "/internal/client_sessions/create";

pub const PUBLISHABLE_KEY_HEADER: &str = "seam-publishable-key";
pub const API_KEY_HEADER: &str = "seam-api-key";
pub const USER_IDENTIFIER_KEY_HEADER: &str = "seam-user-identifier-key";

/// Seam API client
///
/// Holds one pooled HTTP client configured with the resolved credentials.
/// Cloning is cheap and clones share the connection pool, so a single
/// instance can serve many concurrent requests.
#[derive(Debug, Clone)]
pub struct SeamClient {
    client: Client,
    endpoint: Url,
    workspace_id: Option<String>,
    retry: RetryConfig,
}

/// Options for [`SeamClient::get_client_session_token`]
#[derive(Clone, Default)]
pub struct ClientSessionTokenOptions {
    /// Publishable key (`seam_pk...`) or API key (`seam_...`)
    pub key: String,
    pub user_identifier_key: Option<String>,
    /// Falls back to `SEAM_API_URL`, then the public endpoint
    pub endpoint: Option<String>,
    /// Whole-exchange timeout, [`DEFAULT_TIMEOUT`] when unset
    pub timeout: Option<Duration>,
}

impl ClientSessionTokenOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn user_identifier_key(mut self, key: impl Into<String>) -> Self {
        self.user_identifier_key = Some(key.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl std::fmt::Debug for ClientSessionTokenOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSessionTokenOptions")
            .field("key", &"<redacted>")
            .field("user_identifier_key", &self.user_identifier_key)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SeamClient {
    /// Create a client authenticated with an API key.
    ///
    /// Endpoint and workspace still fall back to the environment.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_options(SeamClientOptions::from(api_key))
    }

    /// Create a client entirely from `SEAM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_options(SeamClientOptions::default())
    }

    /// Create a client from explicit options over environment defaults
    pub fn with_options(options: SeamClientOptions) -> Result<Self> {
        Self::with_options_and_env(options, &EnvDefaults::from_env())
    }

    /// Create a client from explicit options over a given environment
    /// snapshot. The process environment is not read.
    pub fn with_options_and_env(options: SeamClientOptions, env: &EnvDefaults) -> Result<Self> {
        let config = resolve_config(options, env)?;
        Self::from_config(config)
    }

    /// Create a client from an already resolved configuration
    pub fn from_config(config: ResolvedConfig) -> Result<Self> {
        let client = build_http_client(
            Client::builder()
                .timeout(config.timeout)
                .connect_timeout(config.connect_timeout)
                .user_agent(config.user_agent.clone())
                .default_headers(config.default_headers()?),
        )?;

        debug!(
            endpoint = %config.endpoint,
            workspace_id = ?config.workspace_id,
            "Seam client created"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint,
            workspace_id: config.workspace_id,
            retry: config.retry,
        })
    }

    /// Get the endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Workspace sent in the `Seam-Workspace` header, if any
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Get a reference to the underlying HTTP client.
    ///
    /// Useful for making custom requests while reusing the client's
    /// connection pool and default headers.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Request dispatch
    // =========================================================================

    /// Send a request and decode the success envelope.
    ///
    /// Transient failures are retried per the client's [`RetryConfig`]
    /// before anything is normalized. Afterwards:
    /// - 2xx: the body decoded as-is
    /// - non-2xx with `error.type == "invalid_input"`: [`SeamError::MalformedInput`]
    /// - any other non-2xx: [`SeamError::Api`]
    /// - no response: [`SeamError::Transport`] with the original error
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<SuccessfulResponse<T>> {
        let url = join_path(&self.endpoint, &request.path)?;
        let mut retries = 0;

        loop {
            debug!("Sending {} {}", request.method, url);

            match self.build(&url, &request).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return decode_success(response).await;
                    }

                    if retries < self.retry.max_retries
                        && self.retry.is_retryable_status(&request.method, status)
                    {
                        retries += 1;
                        let delay = self.retry.delay_for(retries);
                        warn!(%status, retry = retries, ?delay, "Retrying after server error");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    return Err(error_from_response(response).await);
                }
                Err(err) => {
                    if retries < self.retry.max_retries && self.retry.is_retryable_error(&err) {
                        retries += 1;
                        let delay = self.retry.delay_for(retries);
                        warn!(error = %err, retry = retries, ?delay, "Retrying after transport error");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    return Err(SeamError::Transport(err));
                }
            }
        }
    }

    /// [`make_request`](Self::make_request) without the envelope
    pub(crate) async fn request_payload<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T> {
        self.make_request(request).await.map(|r| r.payload)
    }

    fn build(&self, url: &Url, request: &RequestDescriptor) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(request.headers.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder
    }

    // =========================================================================
    // Client session token exchange
    // =========================================================================

    /// Mint a client session token from a publishable key or an API key.
    ///
    /// Needs no configured client. The key picks the header: `seam_pk...`
    /// goes in `seam-publishable-key`, any other `seam_...` key in
    /// `seam-api-key`.
    ///
    /// Failure reporting is asymmetric, a known inconsistency: a 2xx
    /// body holding an error envelope comes back as
    /// `Ok(ApiResponse::Errored(..))`, while a non-2xx response is
    /// `Err(SeamError::Api(..))`, even for `invalid_input`. No retries.
    pub async fn get_client_session_token(
        options: ClientSessionTokenOptions,
    ) -> Result<ApiResponse<ClientSessionResponse>> {
        Self::get_client_session_token_with_env(options, &EnvDefaults::from_env()).await
    }

    /// [`get_client_session_token`](Self::get_client_session_token) against
    /// an explicit environment snapshot
    #[instrument(skip_all)]
    pub async fn get_client_session_token_with_env(
        options: ClientSessionTokenOptions,
        env: &EnvDefaults,
    ) -> Result<ApiResponse<ClientSessionResponse>> {
        let endpoint = match &options.endpoint {
            Some(endpoint) => Url::parse(endpoint)?,
            None => Url::parse(env.endpoint_or_default())?,
        };
        let url = join_path(&endpoint, CLIENT_SESSION_CREATE_PATH)?;

        let mut headers = HeaderMap::new();
        if let Some(name) = session_key_header(&options.key) {
            headers.insert(HeaderName::from_static(name), header_value(&options.key)?);
        }
        if let Some(user_identifier_key) = &options.user_identifier_key {
            headers.insert(
                HeaderName::from_static(USER_IDENTIFIER_KEY_HEADER),
                header_value(user_identifier_key)?,
            );
        }

        debug!("Requesting client session token from {}", url);
        let client = build_http_client(
            Client::builder()
                .timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .connect_timeout(DEFAULT_CONNECT_TIMEOUT),
        )?;
        let response = client
            .post(url)
            .headers(headers)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let request_id = request_id(&response);
            let body = response.text().await.unwrap_or_default();
            let error = error_from_body(&body);
            return Err(ApiError::new(status.as_u16(), request_id, error).into());
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SeamError::ParseError(e.to_string()))?;

        if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
            return Ok(ApiResponse::Errored(ErroredResponse {
                ok: false,
                error: ErrorBody::from_value(error),
            }));
        }

        serde_json::from_value(body)
            .map(ApiResponse::Success)
            .map_err(|e| SeamError::ParseError(e.to_string()))
    }
}

/// Header that carries `key` in the session token exchange, by key prefix
pub fn session_key_header(key: &str) -> Option<&'static str> {
    if key.starts_with(PUBLISHABLE_KEY_PREFIX) {
        Some(PUBLISHABLE_KEY_HEADER)
    } else if key.starts_with(API_KEY_PREFIX) {
        Some(API_KEY_HEADER)
    } else {
        None
    }
}

/// Join a request path onto the endpoint, keeping any endpoint path prefix
fn join_path(endpoint: &Url, path: &str) -> Result<Url> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Finish a reqwest builder; a failure here is a setup problem, not transport
fn build_http_client(builder: ClientBuilder) -> Result<Client> {
    builder
        .build()
        .map_err(|e| SeamError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

fn request_id(response: &Response) -> Option<String> {
    response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<SuccessfulResponse<T>> {
    let body = response
        .text()
        .await
        .map_err(|e| SeamError::ParseError(format!("Failed to read response body: {}", e)))?;
    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };

    let decoded = serde_json::from_str(body).map_err(|e| SeamError::ParseError(e.to_string()))?;
    debug!("Decoded response ({} bytes)", body.len());
    Ok(decoded)
}

async fn error_from_response(response: Response) -> SeamError {
    let status = response.status().as_u16();
    let request_id = request_id(&response);
    let body = response.text().await.unwrap_or_default();

    let err = normalize_error(status, request_id, &body);
    debug!(status, request_id = ?err.request_id(), "Request failed: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> EnvDefaults {
        EnvDefaults::default()
    }

    #[test]
    fn test_client_creation() {
        let client =
            SeamClient::with_options_and_env(SeamClientOptions::from("seam_test"), &env());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_requires_credential() {
        let client = SeamClient::with_options_and_env(SeamClientOptions::new(), &env());
        assert!(matches!(client, Err(SeamError::Configuration(_))));
    }

    #[test]
    fn test_client_exposes_workspace() {
        let options = SeamClientOptions::new()
            .client_session_token("seam_cst_1")
            .workspace_id("ws_1");
        let client = SeamClient::with_options_and_env(options, &env()).unwrap();
        assert_eq!(client.workspace_id(), Some("ws_1"));
        assert_eq!(client.endpoint().as_str(), "https://connect.getseam.com/");
    }

    #[test]
    fn test_session_key_header() {
        assert_eq!(session_key_header("seam_pk1_abc"), Some(PUBLISHABLE_KEY_HEADER));
        assert_eq!(session_key_header("seam_abc"), Some(API_KEY_HEADER));
        assert_eq!(session_key_header("something_else"), None);
    }

    #[test]
    fn test_join_path() {
        let root = Url::parse("https://connect.getseam.com").unwrap();
        assert_eq!(
            join_path(&root, "/devices/list").unwrap().as_str(),
            "https://connect.getseam.com/devices/list"
        );

        let prefixed = Url::parse("http://localhost:3020/api").unwrap();
        assert_eq!(
            join_path(&prefixed, "/devices/list").unwrap().as_str(),
            "http://localhost:3020/api/devices/list"
        );
    }

    #[test]
    fn test_http_client_build_failure_is_configuration() {
        // native-tls has no TLS 1.3 floor, so the builder rejects it
        let builder = Client::builder().min_tls_version(reqwest::tls::Version::TLS_1_3);
        match build_http_client(builder) {
            Err(SeamError::Configuration(message)) => {
                assert!(message.starts_with("Failed to build HTTP client"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_session_token_options_timeout() {
        let options = ClientSessionTokenOptions::new("seam_pk1_abc").timeout(Duration::from_millis(250));
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
        assert!(!format!("{options:?}").contains("seam_pk1_abc"));
    }
}
