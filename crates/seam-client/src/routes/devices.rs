//! Devices, unmanaged devices, providers and the device model catalog

use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    // =========================================================================
    // Devices
    // =========================================================================

    /// List managed devices visible to the workspace
    #[instrument(skip(self, params))]
    pub async fn list_devices(&self, params: &ListDevicesRequest) -> Result<Vec<Device>> {
        let request = RequestDescriptor::get("/devices/list").with_params(params)?;
        self.request_payload::<DevicesResponse>(request)
            .await
            .map(|r| r.devices)
    }

    /// Get a device by id or by name
    #[instrument(skip(self))]
    pub async fn get_device(&self, selector: &DeviceSelector) -> Result<Device> {
        let request = RequestDescriptor::get("/devices/get").with_params(selector)?;
        self.request_payload::<DeviceResponse>(request)
            .await
            .map(|r| r.device)
    }

    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn update_device(&self, params: &UpdateDeviceRequest) -> Result<()> {
        let request = RequestDescriptor::post("/devices/update").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_device(&self, device_id: &str) -> Result<()> {
        let request =
            RequestDescriptor::delete("/devices/delete").with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }

    // =========================================================================
    // Device Providers
    // =========================================================================

    #[instrument(skip(self, params))]
    pub async fn list_device_providers(
        &self,
        params: &ListDeviceProvidersRequest,
    ) -> Result<Vec<DeviceProvider>> {
        let request =
            RequestDescriptor::get("/devices/list_device_providers").with_params(params)?;
        self.request_payload::<DeviceProvidersResponse>(request)
            .await
            .map(|r| r.device_providers)
    }

    // =========================================================================
    // Unmanaged Devices
    // =========================================================================

    #[instrument(skip(self, params))]
    pub async fn list_unmanaged_devices(&self, params: &ListDevicesRequest) -> Result<Vec<Device>> {
        let request = RequestDescriptor::get("/devices/unmanaged/list").with_params(params)?;
        self.request_payload::<DevicesResponse>(request)
            .await
            .map(|r| r.devices)
    }

    #[instrument(skip(self))]
    pub async fn get_unmanaged_device(&self, selector: &DeviceSelector) -> Result<Device> {
        let request = RequestDescriptor::get("/devices/unmanaged/get").with_params(selector)?;
        self.request_payload::<DeviceResponse>(request)
            .await
            .map(|r| r.device)
    }

    /// Set `is_managed` to bring the device under platform control
    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn update_unmanaged_device(&self, params: &UpdateUnmanagedDeviceRequest) -> Result<()> {
        let request = RequestDescriptor::post("/devices/unmanaged/update").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }

    // =========================================================================
    // Device Models
    // =========================================================================

    /// Search the catalog of supported device models
    #[instrument(skip(self, params))]
    pub async fn list_device_models(
        &self,
        params: &ListDeviceModelsRequest,
    ) -> Result<Vec<DeviceModel>> {
        let request = RequestDescriptor::get("/internal/device_models/list").with_params(params)?;
        self.request_payload::<DeviceModelsResponse>(request)
            .await
            .map(|r| r.device_models)
    }
}
