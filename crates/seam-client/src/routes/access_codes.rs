//! Access codes, managed and unmanaged

use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    // =========================================================================
    // Managed Access Codes
    // =========================================================================

    /// List access codes on a device, or specific codes by id
    #[instrument(skip(self, params))]
    pub async fn list_access_codes(
        &self,
        params: &ListAccessCodesRequest,
    ) -> Result<Vec<AccessCode>> {
        let request = RequestDescriptor::get("/access_codes/list").with_params(params)?;
        self.request_payload::<AccessCodesResponse>(request)
            .await
            .map(|r| r.access_codes)
    }

    /// Get a single access code
    #[instrument(skip(self, params))]
    pub async fn get_access_code(&self, params: &GetAccessCodeRequest) -> Result<AccessCode> {
        let request = RequestDescriptor::get("/access_codes/get").with_params(params)?;
        self.request_payload::<AccessCodeResponse>(request)
            .await
            .map(|r| r.access_code)
    }

    /// Create an ongoing or time-bound access code
    ///
    /// Schedule problems (missing or inverted bounds) are reported by the
    /// platform as [`SeamError::MalformedInput`](crate::SeamError::MalformedInput).
    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn create_access_code(&self, params: &CreateAccessCodeRequest) -> Result<AccessCode> {
        let request = RequestDescriptor::post("/access_codes/create").with_params(params)?;
        self.request_payload::<AccessCodeResponse>(request)
            .await
            .map(|r| r.access_code)
    }

    /// Create one code shared across several devices
    #[instrument(skip(self, params))]
    pub async fn create_multiple_access_codes(
        &self,
        params: &CreateMultipleAccessCodesRequest,
    ) -> Result<Vec<AccessCode>> {
        let request =
            RequestDescriptor::post("/access_codes/create_multiple").with_params(params)?;
        self.request_payload::<AccessCodesResponse>(request)
            .await
            .map(|r| r.access_codes)
    }

    /// Update an access code; the change is applied asynchronously
    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn update_access_code(
        &self,
        params: &UpdateAccessCodeRequest,
    ) -> Result<ActionAttempt> {
        let request = RequestDescriptor::post("/access_codes/update").with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    /// Remove an access code from its device
    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn delete_access_code(
        &self,
        params: &DeleteAccessCodeRequest,
    ) -> Result<ActionAttempt> {
        let request = RequestDescriptor::post("/access_codes/delete").with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    /// Ask the platform for a code valid on the given device
    #[instrument(skip(self))]
    pub async fn generate_access_code(&self, device_id: &str) -> Result<GeneratedCode> {
        let request = RequestDescriptor::get("/access_codes/generate_code")
            .with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<GeneratedCodeResponse>(request)
            .await
            .map(|r| r.generated_code)
    }

    /// Claim the backup code standing in for a time-bound code
    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn pull_backup_access_code(
        &self,
        params: &AccessCodeIdRequest,
    ) -> Result<AccessCode> {
        let request =
            RequestDescriptor::post("/access_codes/pull_backup_access_code").with_params(params)?;
        self.request_payload::<BackupAccessCodeResponse>(request)
            .await
            .map(|r| r.backup_access_code)
    }

    // =========================================================================
    // Unmanaged Access Codes
    // =========================================================================

    /// List codes on a device that an external system owns
    #[instrument(skip(self))]
    pub async fn list_unmanaged_access_codes(
        &self,
        device_id: &str,
    ) -> Result<Vec<UnmanagedAccessCode>> {
        let request = RequestDescriptor::get("/access_codes/unmanaged/list")
            .with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<AccessCodesResponse>(request)
            .await
            .map(|r| r.access_codes)
    }

    #[instrument(skip(self, params))]
    pub async fn get_unmanaged_access_code(
        &self,
        params: &GetAccessCodeRequest,
    ) -> Result<UnmanagedAccessCode> {
        let request = RequestDescriptor::get("/access_codes/unmanaged/get").with_params(params)?;
        self.request_payload::<AccessCodeResponse>(request)
            .await
            .map(|r| r.access_code)
    }

    /// Mark an unmanaged code as managed
    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn update_unmanaged_access_code(
        &self,
        params: &UpdateUnmanagedAccessCodeRequest,
    ) -> Result<()> {
        let request =
            RequestDescriptor::post("/access_codes/unmanaged/update").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }

    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn delete_unmanaged_access_code(
        &self,
        params: &DeleteAccessCodeRequest,
    ) -> Result<ActionAttempt> {
        let request =
            RequestDescriptor::post("/access_codes/unmanaged/delete").with_params(params)?;
        self.request_payload::<ActionAttemptResponse>(request)
            .await
            .map(|r| r.action_attempt)
    }

    /// Make the platform the system of record for an unmanaged code
    #[instrument(skip(self, params), fields(access_code_id = %params.access_code_id))]
    pub async fn convert_unmanaged_access_code_to_managed(
        &self,
        params: &ConvertUnmanagedAccessCodeRequest,
    ) -> Result<()> {
        let request = RequestDescriptor::post("/access_codes/unmanaged/convert_to_managed")
            .with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
