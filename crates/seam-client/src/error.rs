//! Error types for Seam client operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Seam client operations
pub type Result<T> = std::result::Result<T, SeamError>;

/// `error.type` value the platform uses for request validation failures
pub const INVALID_INPUT_ERROR_TYPE: &str = "invalid_input";

/// Errors that can occur during Seam client operations
#[derive(Error, Debug)]
pub enum SeamError {
    /// Client options could not be resolved into a usable configuration.
    /// Raised before any network activity.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The platform rejected the request input (`error.type == "invalid_input"`)
    #[error("Malformed input ({status}): {message}")]
    MalformedInput {
        status: u16,
        request_id: Option<String>,
        message: String,
        /// Field-level validation detail, exactly as the platform sent it
        validation_errors: serde_json::Value,
    },

    /// The platform answered with any other non-2xx status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No response was received. The transport error is carried unmodified.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A successful response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl SeamError {
    /// HTTP status of the response that produced this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MalformedInput { status, .. } => Some(*status),
            Self::Api(err) => Some(err.status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Value of the `seam-request-id` response header, if any
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { request_id, .. } => request_id.as_deref(),
            Self::Api(err) => err.request_id.as_deref(),
            _ => None,
        }
    }

    /// True when the request never produced a server response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The platform refused the credential (401 or 403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(err) if err.status == 401 || err.status == 403)
    }
}

/// A non-2xx response from the platform that is not an input validation failure
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Seam API error {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    /// Correlation id from the `seam-request-id` response header
    pub request_id: Option<String>,
    /// `error.type` from the envelope, absent when the body had no envelope
    pub error_type: Option<String>,
    pub message: String,
    /// Extra `error.data` payload, if the platform sent one
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    /// Build from a status and an optional decoded envelope
    pub fn new(status: u16, request_id: Option<String>, body: Option<ErrorBody>) -> Self {
        match body {
            Some(body) => Self {
                status,
                request_id,
                message: if body.message.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.message
                },
                error_type: body.error_type,
                data: body.data,
            },
            None => Self {
                status,
                request_id,
                error_type: None,
                message: format!("HTTP {}", status),
                data: None,
            },
        }
    }
}

/// The `error` object of the platform's error envelope.
///
/// Every field is optional on the wire; a missing or null `message`
/// decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Build from an arbitrary `error` value, keeping whatever fields fit.
    ///
    /// A bare string is taken as the message.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let present = |key: &str| value.get(key).filter(|v| !v.is_null()).cloned();

        match value {
            serde_json::Value::String(message) => Self {
                message: message.clone(),
                ..Self::default()
            },
            _ => Self {
                error_type: value.get("type").and_then(|v| v.as_str()).map(str::to_string),
                message: value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                validation_errors: present("validation_errors"),
                data: present("data"),
            },
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.error_type.as_deref() == Some(INVALID_INPUT_ERROR_TYPE)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Pull the `error` object out of a raw response body, if there is one
pub(crate) fn error_from_body(body: &str) -> Option<ErrorBody> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")
        .filter(|e| !e.is_null())
        .map(ErrorBody::from_value)
}

/// Turn a non-2xx status, request id and raw body into the matching error.
///
/// `invalid_input` envelopes become `MalformedInput`; everything else,
/// including bodies without an envelope, becomes `Api`.
pub(crate) fn normalize_error(status: u16, request_id: Option<String>, body: &str) -> SeamError {
    match error_from_body(body) {
        Some(error) if error.is_invalid_input() => SeamError::MalformedInput {
            status,
            request_id,
            message: error.message,
            validation_errors: error.validation_errors.unwrap_or(serde_json::Value::Null),
        },
        error => ApiError::new(status, request_id, error).into(),
    }
}
