use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    /// Ask a lock to lock. The returned attempt is usually still pending.
    #[instrument(skip(self))]
    pub async fn lock_door(&self, device_id: &str) -> Result<ActionAttempt> {
        let request =
            RequestDescriptor::post("/locks/lock_door").with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    #[instrument(skip(self))]
    pub async fn unlock_door(&self, device_id: &str) -> Result<ActionAttempt> {
        let request = RequestDescriptor::post("/locks/unlock_door")
            .with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }
}
