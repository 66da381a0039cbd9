//! Request shapes, one per remote operation
//!
//! Requests are structural only: required identifiers are plain fields,
//! optional ones are skipped when unset. Semantic validation belongs to the
//! platform and comes back as [`SeamError::MalformedInput`](crate::SeamError::MalformedInput).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::DateInput;
use super::models::ClimateSetting;

// =============================================================================
// Connect Webviews / Connected Accounts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceSelectionMode {
    None,
    Single,
    Multiple,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateConnectWebviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_providers: Option<Vec<String>>,
    /// `stable` or `internal_beta`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_selection_mode: Option<DeviceSelectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_redirect_failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatically_manage_new_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_device_creation: Option<bool>,
}

/// Get or delete a Connect Webview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectWebviewRequest {
    pub connect_webview_id: String,
}

impl ConnectWebviewRequest {
    pub fn new(connect_webview_id: impl Into<String>) -> Self {
        Self {
            connect_webview_id: connect_webview_id.into(),
        }
    }
}

/// Get or delete a connected account, by id or by account email
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectedAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ConnectedAccountRequest {
    pub fn by_id(connected_account_id: impl Into<String>) -> Self {
        Self {
            connected_account_id: Some(connected_account_id.into()),
            email: None,
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            connected_account_id: None,
            email: Some(email.into()),
        }
    }
}

// =============================================================================
// Devices
// =============================================================================

/// Filters for device and thermostat listings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDevicesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_webview_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_ids: Option<Vec<String>>,
    /// Upper bound on returned devices; there is no cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDeviceProvidersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_category: Option<String>,
}

/// Look a device up by id or by name, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceSelector {
    DeviceId(String),
    Name(String),
}

impl DeviceSelector {
    pub fn id(device_id: impl Into<String>) -> Self {
        Self::DeviceId(device_id.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDeviceRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,
    /// Partial device properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
}

/// Requests that only identify a device: delete, lock, unlock,
/// noise threshold and climate schedule listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdRequest {
    pub device_id: String,
}

impl DeviceIdRequest {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUnmanagedDeviceRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDeviceModelsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_search: Option<String>,
}

// =============================================================================
// Access Codes
// =============================================================================

/// Both bounds of a time-bound access code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeWindow {
    pub starts_at: DateInput,
    pub ends_at: DateInput,
}

impl TimeWindow {
    pub fn new(starts_at: impl Into<DateInput>, ends_at: impl Into<DateInput>) -> Self {
        Self {
            starts_at: starts_at.into(),
            ends_at: ends_at.into(),
        }
    }
}

/// Create an access code.
///
/// Without a `schedule` the code is ongoing; with one it is time-bound and
/// carries both `starts_at` and `ends_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAccessCodeRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_code_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_modification: Option<bool>,
    #[serde(flatten)]
    pub schedule: Option<TimeWindow>,
}

impl CreateAccessCodeRequest {
    pub fn ongoing(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            ..Default::default()
        }
    }

    pub fn scheduled(
        device_id: impl Into<String>,
        starts_at: impl Into<DateInput>,
        ends_at: impl Into<DateInput>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            schedule: Some(TimeWindow::new(starts_at, ends_at)),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// What to do when one code cannot be shared across all devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSharingBehavior {
    Throw,
    CreateRandomCode,
}

/// Create one code shared across several devices
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateMultipleAccessCodesRequest {
    pub device_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_when_code_cannot_be_shared: Option<CodeSharingBehavior>,
    #[serde(flatten)]
    pub schedule: Option<TimeWindow>,
}

/// Target shape of an access code update, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessCodeUpdateKind {
    Ongoing,
    TimeBound {
        starts_at: DateInput,
        ends_at: DateInput,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAccessCodeRequest {
    pub access_code_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_code_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_modification: Option<bool>,
    #[serde(flatten)]
    pub kind: Option<AccessCodeUpdateKind>,
}

/// List codes on a device, or specific codes by id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAccessCodesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code_ids: Option<Vec<String>>,
}

impl ListAccessCodesRequest {
    pub fn for_device(device_id: impl Into<String>) -> Self {
        Self {
            device_id: Some(device_id.into()),
            access_code_ids: None,
        }
    }

    pub fn by_ids(access_code_ids: Vec<String>) -> Self {
        Self {
            device_id: None,
            access_code_ids: Some(access_code_ids),
        }
    }
}

/// Find a code by id, or by device and code value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetAccessCodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl GetAccessCodeRequest {
    pub fn by_id(access_code_id: impl Into<String>) -> Self {
        Self {
            access_code_id: Some(access_code_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteAccessCodeRequest {
    pub access_code_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl DeleteAccessCodeRequest {
    pub fn new(access_code_id: impl Into<String>) -> Self {
        Self {
            access_code_id: access_code_id.into(),
            device_id: None,
        }
    }
}

/// Requests that only identify an access code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessCodeIdRequest {
    pub access_code_id: String,
}

impl AccessCodeIdRequest {
    pub fn new(access_code_id: impl Into<String>) -> Self {
        Self {
            access_code_id: access_code_id.into(),
        }
    }
}

/// Hand an unmanaged code over to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUnmanagedAccessCodeRequest {
    pub access_code_id: String,
    pub is_managed: bool,
}

impl UpdateUnmanagedAccessCodeRequest {
    pub fn manage(access_code_id: impl Into<String>) -> Self {
        Self {
            access_code_id: access_code_id.into(),
            is_managed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertUnmanagedAccessCodeRequest {
    pub access_code_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_modification: Option<bool>,
}

// =============================================================================
// Action Attempts / Webhooks / Events
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionAttemptRequest {
    pub action_attempt_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateWebhookRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
}

/// Get or delete a webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    pub webhook_id: String,
}

impl WebhookRequest {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetEventRequest {
    pub event_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListEventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account_id: Option<String>,
}

// =============================================================================
// Noise Thresholds
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateNoiseThresholdRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub starts_daily_at: String,
    pub ends_daily_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_threshold_decibels: Option<f64>,
    /// Only available for NoiseAware devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_threshold_nrs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateNoiseThresholdRequest {
    pub device_id: String,
    pub noise_threshold_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_daily_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_daily_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_threshold_decibels: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_threshold_nrs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteNoiseThresholdRequest {
    pub device_id: String,
    pub noise_threshold_id: String,
}

// =============================================================================
// Client Sessions
// =============================================================================

/// Create a client session (also used by get-or-create)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateClientSessionRequest {
    pub user_identifier_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_webview_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_account_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListClientSessionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_identifier_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_user_identifier_key: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetClientSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_identifier_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteClientSessionRequest {
    pub client_session_id: String,
}

// =============================================================================
// Climate Setting Schedules / Thermostats
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetClimateSettingScheduleRequest {
    pub climate_setting_schedule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateClimateSettingScheduleRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Always `time_bound` today
    pub schedule_type: String,
    pub schedule_starts_at: DateInput,
    pub schedule_ends_at: DateInput,
    #[serde(flatten)]
    pub climate_setting: ClimateSetting,
}

impl CreateClimateSettingScheduleRequest {
    pub fn time_bound(
        device_id: impl Into<String>,
        starts_at: impl Into<DateInput>,
        ends_at: impl Into<DateInput>,
        climate_setting: ClimateSetting,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            name: None,
            schedule_type: "time_bound".to_string(),
            schedule_starts_at: starts_at.into(),
            schedule_ends_at: ends_at.into(),
            climate_setting,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateClimateSettingScheduleRequest {
    pub climate_setting_schedule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_starts_at: Option<DateInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_ends_at: Option<DateInput>,
    #[serde(flatten)]
    pub climate_setting: ClimateSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteClimateSettingScheduleRequest {
    pub climate_setting_schedule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateThermostatRequest {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
    pub default_climate_setting: ClimateSetting,
}
