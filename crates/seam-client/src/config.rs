//! Client configuration and its resolution
//!
//! Options come from two places: explicit [`SeamClientOptions`] and a
//! snapshot of the process environment ([`EnvDefaults`]). [`resolve_config`]
//! merges them exactly once, at construction, and enforces the
//! authentication rules:
//!
//! - an API key or a client session token must be present
//! - an API key and a client session token cannot both be given
//! - a regular API key (`seam_` prefix) cannot be combined with a workspace id

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::error::{Result, SeamError};
use crate::retry::RetryConfig;

/// Endpoint used when neither options nor environment provide one
pub const DEFAULT_ENDPOINT: &str = "https://connect.getseam.com";

/// Prefix shared by every Seam-issued key
pub const API_KEY_PREFIX: &str = "seam_";
/// Prefix of publishable (browser-safe) keys
pub const PUBLISHABLE_KEY_PREFIX: &str = "seam_pk";

/// Workspace scoping header, sent only when a workspace id is resolved
pub const WORKSPACE_HEADER: &str = "seam-workspace";

pub const API_KEY_ENV: &str = "SEAM_API_KEY";
pub const ENDPOINT_ENV: &str = "SEAM_API_URL";
pub const WORKSPACE_ID_ENV: &str = "SEAM_WORKSPACE_ID";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_WITH_WORKSPACE: &str = "You can't use API Key Authentication AND specify a workspace. \
     Your API Key only works for the workspace it was created in. To use Session Key \
     Authentication with multi-workspace support, contact Seam support.";

/// Environment-provided defaults, captured once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDefaults {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub workspace_id: Option<String>,
}

impl EnvDefaults {
    /// Read `SEAM_API_KEY`, `SEAM_API_URL` and `SEAM_WORKSPACE_ID`.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: read_var(API_KEY_ENV),
            endpoint: read_var(ENDPOINT_ENV),
            workspace_id: read_var(WORKSPACE_ID_ENV),
        }
    }

    /// Endpoint from the environment, or the public default
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Explicit client options. Unset fields fall back to [`EnvDefaults`].
#[derive(Clone, Default)]
pub struct SeamClientOptions {
    pub api_key: Option<String>,
    pub client_session_token: Option<String>,
    pub endpoint: Option<String>,
    pub workspace_id: Option<String>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub retry: RetryConfig,
    /// Extra default headers sent with every request
    pub headers: Vec<(String, String)>,
    pub user_agent: Option<String>,
}

impl SeamClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn client_session_token(mut self, token: impl Into<String>) -> Self {
        self.client_session_token = Some(token.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl From<&str> for SeamClientOptions {
    fn from(api_key: &str) -> Self {
        Self::new().api_key(api_key)
    }
}

// Credentials stay out of logs.
impl fmt::Debug for SeamClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeamClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "client_session_token",
                &self.client_session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("endpoint", &self.endpoint)
            .field("workspace_id", &self.workspace_id)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// The credential sent as `Authorization: Bearer ...`
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    ApiKey(String),
    ClientSessionToken(String),
}

impl Credential {
    pub fn bearer(&self) -> &str {
        match self {
            Self::ApiKey(key) => key,
            Self::ClientSessionToken(token) => token,
        }
    }

    /// API keys issued by Seam carry the `seam_` prefix
    pub fn is_regular_api_key(&self) -> bool {
        matches!(self, Self::ApiKey(key) if key.starts_with(API_KEY_PREFIX))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Self::ClientSessionToken(_) => f.write_str("ClientSessionToken(<redacted>)"),
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub credential: Credential,
    pub endpoint: Url,
    pub workspace_id: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryConfig,
    pub headers: Vec<(String, String)>,
    pub user_agent: String,
}

impl ResolvedConfig {
    /// Default headers for every request: bearer auth, workspace scoping
    /// and caller-supplied extras. Extras cannot replace `Authorization`.
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SeamError::Configuration(format!("Invalid header name {}: {}", name, e))
            })?;
            headers.insert(name, header_value(value)?);
        }

        let mut auth = header_value(&format!("Bearer {}", self.credential.bearer()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(workspace_id) = &self.workspace_id {
            headers.insert(
                HeaderName::from_static(WORKSPACE_HEADER),
                header_value(workspace_id)?,
            );
        }

        Ok(headers)
    }
}

pub(crate) fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| SeamError::Configuration(format!("Invalid header value: {}", e)))
}

/// Default `User-Agent` for requests from this crate
pub fn default_user_agent() -> String {
    format!(
        "Rust SDK v{} (https://github.com/seamapi)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Merge explicit options over environment defaults and validate the
/// authentication mode.
pub fn resolve_config(options: SeamClientOptions, env: &EnvDefaults) -> Result<ResolvedConfig> {
    // An explicit session token means the caller chose session auth, so the
    // environment API key is not consulted.
    let api_key = match (&options.api_key, &options.client_session_token) {
        (Some(key), _) => Some(key.clone()),
        (None, Some(_)) => None,
        (None, None) => env.api_key.clone(),
    };
    let workspace_id = options.workspace_id.or_else(|| env.workspace_id.clone());
    let endpoint = options
        .endpoint
        .or_else(|| env.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let credential = match (api_key, options.client_session_token) {
        (Some(_), Some(_)) => {
            return Err(SeamError::Configuration(
                "Provide either an API key or a client session token, not both".to_string(),
            ))
        }
        (Some(key), None) => Credential::ApiKey(key),
        (None, Some(token)) => Credential::ClientSessionToken(token),
        (None, None) => {
            return Err(SeamError::Configuration(format!(
                "{} not found in environment, and api_key not provided",
                API_KEY_ENV
            )))
        }
    };

    if credential.is_regular_api_key() && workspace_id.is_some() {
        return Err(SeamError::Configuration(API_KEY_WITH_WORKSPACE.to_string()));
    }

    let endpoint = Url::parse(&endpoint)?;

    Ok(ResolvedConfig {
        credential,
        endpoint,
        workspace_id,
        timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
        connect_timeout: options.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        retry: options.retry,
        headers: options.headers,
        user_agent: options.user_agent.unwrap_or_else(default_user_agent),
    })
}
