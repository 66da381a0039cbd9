//! Noise thresholds on noise sensors
//!
//! Every mutation is asynchronous on the device side and returns an
//! [`ActionAttempt`].

use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

const NOISE_THRESHOLDS_PATH: &str = "/noise_sensors/noise_thresholds";

impl SeamClient {
    #[instrument(skip(self))]
    pub async fn list_noise_thresholds(&self, device_id: &str) -> Result<Vec<NoiseThreshold>> {
        let request = RequestDescriptor::get(format!("{}/list", NOISE_THRESHOLDS_PATH))
            .with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<NoiseThresholdsResponse>(request)
            .await
            .map(|r| r.noise_thresholds)
    }

    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn create_noise_threshold(
        &self,
        params: &CreateNoiseThresholdRequest,
    ) -> Result<ActionAttempt> {
        let request = RequestDescriptor::post(format!("{}/create", NOISE_THRESHOLDS_PATH))
            .with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    #[instrument(skip(self, params), fields(noise_threshold_id = %params.noise_threshold_id))]
    pub async fn update_noise_threshold(
        &self,
        params: &UpdateNoiseThresholdRequest,
    ) -> Result<ActionAttempt> {
        let request = RequestDescriptor::put(format!("{}/update", NOISE_THRESHOLDS_PATH))
            .with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    #[instrument(skip(self, params), fields(noise_threshold_id = %params.noise_threshold_id))]
    pub async fn delete_noise_threshold(
        &self,
        params: &DeleteNoiseThresholdRequest,
    ) -> Result<ActionAttempt> {
        let request = RequestDescriptor::delete(format!("{}/delete", NOISE_THRESHOLDS_PATH))
            .with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }
}
