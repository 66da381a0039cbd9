//! Resource models returned by the platform
//!
//! Well-known fields are typed. Open-ended sub-objects (device properties,
//! custom metadata, action results) stay as `serde_json::Value`. Unknown
//! fields are ignored so new platform fields do not break decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Devices
// =============================================================================

/// A device connected through a connected account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub capabilities_supported: Vec<String>,
    /// Provider-specific properties (`locked`, `online`, `name`, ...)
    #[serde(default)]
    pub properties: Value,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub connected_account_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub is_managed: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub warnings: Vec<Value>,
}

impl Device {
    /// `properties.name`, if the provider reports one
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// `properties.online`, if the provider reports it
    pub fn is_online(&self) -> Option<bool> {
        self.properties.get("online").and_then(Value::as_bool)
    }

    /// `properties.locked`, for lock devices
    pub fn is_locked(&self) -> Option<bool> {
        self.properties.get("locked").and_then(Value::as_bool)
    }
}

/// A device provider (brand integration) that Connect Webviews can offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProvider {
    pub device_provider_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub provider_categories: Vec<String>,
}

/// An entry of the device model catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceModel {
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub manufacturer_model_id: Option<String>,
    #[serde(default)]
    pub support_level: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub connection_type: Option<String>,
}

// =============================================================================
// Access Codes
// =============================================================================

/// A PIN code programmed on a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessCode {
    pub access_code_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub common_code_key: Option<String>,
    /// `ongoing` or `time_bound`
    #[serde(default, rename = "type")]
    pub code_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the platform is the system of record for this code
    #[serde(default)]
    pub is_managed: Option<bool>,
    #[serde(default)]
    pub is_backup_access_code_available: Option<bool>,
    #[serde(default)]
    pub is_scheduled_on_device: Option<bool>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub warnings: Vec<Value>,
}

/// Codes owned by an external system share the managed code shape
pub type UnmanagedAccessCode = AccessCode;

/// A code suggested by the platform for a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub device_id: String,
    pub code: String,
}

// =============================================================================
// Connect Webviews / Connected Accounts
// =============================================================================

/// A hosted flow in which an end user links a device account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectWebview {
    pub connect_webview_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub accepted_providers: Vec<String>,
    #[serde(default)]
    pub accepted_devices: Vec<String>,
    #[serde(default)]
    pub any_provider_allowed: Option<bool>,
    #[serde(default)]
    pub any_device_allowed: Option<bool>,
    #[serde(default)]
    pub login_successful: Option<bool>,
    #[serde(default)]
    pub connected_account_id: Option<String>,
    #[serde(default)]
    pub device_selection_mode: Option<String>,
    #[serde(default)]
    pub custom_redirect_url: Option<String>,
    #[serde(default)]
    pub custom_redirect_failure_url: Option<String>,
    #[serde(default)]
    pub custom_metadata: Option<Value>,
    #[serde(default)]
    pub automatically_manage_new_devices: Option<bool>,
    #[serde(default)]
    pub wait_for_device_creation: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A third-party account linked through a Connect Webview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedAccount {
    pub connected_account_id: String,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub user_identifier: Option<Value>,
    #[serde(default)]
    pub custom_metadata: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub warnings: Vec<Value>,
}

// =============================================================================
// Webhooks / Events
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub webhook_id: String,
    pub url: String,
    #[serde(default)]
    pub event_types: Vec<String>,
    #[serde(default)]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub event_type: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub connected_account_id: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Noise Sensors
// =============================================================================

/// A daily window with a noise limit on a noise sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseThreshold {
    pub noise_threshold_id: String,
    pub device_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `HH:MM` in the device's local time
    pub starts_daily_at: String,
    pub ends_daily_at: String,
    #[serde(default)]
    pub noise_threshold_decibels: Option<f64>,
    /// Only reported by NoiseAware devices
    #[serde(default)]
    pub noise_threshold_nrs: Option<f64>,
}

// =============================================================================
// Client Sessions
// =============================================================================

/// A short-lived, scope-restricted credential and its grants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    pub client_session_id: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_identifier_key: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub connect_webview_ids: Vec<String>,
    #[serde(default)]
    pub connected_account_ids: Vec<String>,
    #[serde(default)]
    pub device_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Thermostats
// =============================================================================

/// Thermostat set points and modes. Every field is optional so the same
/// type serves partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_heating_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_cooling_enabled: Option<bool>,
    /// `off`, `heat`, `cool` or `heatcool`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hvac_mode_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_set_point_celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_set_point_celsius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_set_point_fahrenheit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_set_point_fahrenheit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_override_allowed: Option<bool>,
}

/// A climate setting applied to a thermostat for a bounded period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSettingSchedule {
    pub climate_setting_schedule_id: String,
    pub device_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schedule_type: Option<String>,
    #[serde(default)]
    pub schedule_starts_at: Option<String>,
    #[serde(default)]
    pub schedule_ends_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub climate_setting: ClimateSetting,
}

// =============================================================================
// Action Attempts / Workspaces
// =============================================================================

/// Tracks an asynchronous action on a device (lock, program a code, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAttempt {
    pub action_attempt_id: String,
    #[serde(default)]
    pub action_type: Option<String>,
    /// `pending`, `success` or `error`
    pub status: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ActionAttempt {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_sandbox: bool,
    #[serde(default)]
    pub connect_partner_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_ignores_unknown_fields() {
        let device: Device = serde_json::from_value(json!({
            "device_id": "dev_1",
            "device_type": "august_lock",
            "properties": {"name": "Front Door", "online": true, "locked": false},
            "capabilities_supported": ["access_code", "lock"],
            "created_at": "2024-01-02T03:04:05.000Z",
            "brand_new_field": {"x": 1}
        }))
        .unwrap();

        assert_eq!(device.name(), Some("Front Door"));
        assert_eq!(device.is_online(), Some(true));
        assert_eq!(device.is_locked(), Some(false));
        assert!(device.created_at.is_some());
        assert!(device.errors.is_empty());
    }

    #[test]
    fn test_climate_setting_schedule_flattens_setting() {
        let schedule: ClimateSettingSchedule = serde_json::from_value(json!({
            "climate_setting_schedule_id": "css_1",
            "device_id": "dev_1",
            "schedule_type": "time_bound",
            "schedule_starts_at": "2024-05-01T00:00:00Z",
            "schedule_ends_at": "2024-05-02T00:00:00Z",
            "hvac_mode_setting": "cool",
            "cooling_set_point_celsius": 21.5
        }))
        .unwrap();

        assert_eq!(schedule.climate_setting.hvac_mode_setting.as_deref(), Some("cool"));
        assert_eq!(schedule.climate_setting.cooling_set_point_celsius, Some(21.5));
    }

    #[test]
    fn test_partial_climate_setting_serialization() {
        let setting = ClimateSetting {
            heating_set_point_celsius: Some(19.0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&setting).unwrap(),
            json!({"heating_set_point_celsius": 19.0})
        );
    }
}
