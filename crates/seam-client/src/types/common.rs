//! Envelopes and shared value types

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ErrorBody;

/// A decoded 2xx body: `{"ok": true, ...payload}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessfulResponse<T> {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(flatten)]
    pub payload: T,
}

fn default_ok() -> bool {
    true
}

/// A logical failure: `{"ok": false, "error": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErroredResponse {
    pub ok: bool,
    pub error: ErrorBody,
}

/// Either outcome, returned as a value rather than an error.
///
/// Only the client session token exchange uses this shape; see
/// [`SeamClient::get_client_session_token`](crate::SeamClient::get_client_session_token).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(SuccessfulResponse<T>),
    Errored(ErroredResponse),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Payload on success, the error body otherwise
    pub fn into_result(self) -> std::result::Result<T, ErrorBody> {
        match self {
            Self::Success(response) => Ok(response.payload),
            Self::Errored(response) => Err(response.error),
        }
    }
}

/// A date-like request field: free text or a structured timestamp.
///
/// Always sent as a string; structured values use RFC 3339 with
/// millisecond precision and a `Z` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    DateTime(DateTime<Utc>),
}

impl DateInput {
    pub fn to_api_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_api_string())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_api_string())
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Text)
    }
}
