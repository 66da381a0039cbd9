use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    /// Get the current state of an action attempt. The client never polls.
    #[instrument(skip(self))]
    pub async fn get_action_attempt(&self, action_attempt_id: &str) -> Result<ActionAttempt> {
        let params = ActionAttemptRequest {
            action_attempt_id: action_attempt_id.to_string(),
        };
        let request = RequestDescriptor::get("/action_attempts/get").with_params(&params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }
}
