//! Response payload shapes
//!
//! Each struct is the payload of a [`SuccessfulResponse`](super::SuccessfulResponse)
//! and names the sub-field a façade method unwraps.

use serde::{Deserialize, Serialize};

use super::models::*;

/// Payload of operations that return nothing beyond `ok`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceResponse {
    pub device: Device,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProvidersResponse {
    pub device_providers: Vec<DeviceProvider>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceModelsResponse {
    pub device_models: Vec<DeviceModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessCodesResponse {
    pub access_codes: Vec<AccessCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessCodeResponse {
    pub access_code: AccessCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCodeResponse {
    pub generated_code: GeneratedCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupAccessCodeResponse {
    pub backup_access_code: AccessCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAttemptResponse {
    pub action_attempt: ActionAttempt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectWebviewsResponse {
    pub connect_webviews: Vec<ConnectWebview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectWebviewResponse {
    pub connect_webview: ConnectWebview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedAccountsResponse {
    pub connected_accounts: Vec<ConnectedAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedAccountResponse {
    pub connected_account: ConnectedAccount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhooksResponse {
    pub webhooks: Vec<Webhook>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub webhook: Webhook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseThresholdsResponse {
    pub noise_thresholds: Vec<NoiseThreshold>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSessionsResponse {
    pub client_sessions: Vec<ClientSession>,
}

/// Also the payload of the client session token exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSessionResponse {
    pub client_session: ClientSession,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSettingSchedulesResponse {
    pub climate_setting_schedules: Vec<ClimateSettingSchedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSettingScheduleResponse {
    pub climate_setting_schedule: ClimateSettingSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatsResponse {
    pub thermostats: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatResponse {
    pub thermostat: Device,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspacesResponse {
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    pub workspace: Workspace,
}
