//! Thermostats and their climate setting schedules

use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

const SCHEDULES_PATH: &str = "/thermostats/climate_setting_schedules";

impl SeamClient {
    // =========================================================================
    // Thermostats
    // =========================================================================

    #[instrument(skip(self, params))]
    pub async fn list_thermostats(&self, params: &ListDevicesRequest) -> Result<Vec<Device>> {
        let request = RequestDescriptor::get("/thermostats/list").with_params(params)?;
        self.request_payload::<ThermostatsResponse>(request)
            .await
            .map(|r| r.thermostats)
    }

    #[instrument(skip(self))]
    pub async fn get_thermostat(&self, selector: &DeviceSelector) -> Result<Device> {
        let request = RequestDescriptor::get("/thermostats/get").with_params(selector)?;
        self.request_payload::<ThermostatResponse>(request)
            .await
            .map(|r| r.thermostat)
    }

    /// Replace the thermostat's default climate setting
    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn update_thermostat(&self, params: &UpdateThermostatRequest) -> Result<()> {
        let request = RequestDescriptor::post("/thermostats/update").with_params(params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }

    // =========================================================================
    // Climate Setting Schedules
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn list_climate_setting_schedules(
        &self,
        device_id: &str,
    ) -> Result<Vec<ClimateSettingSchedule>> {
        let request = RequestDescriptor::get(format!("{}/list", SCHEDULES_PATH))
            .with_params(&DeviceIdRequest::new(device_id))?;
        self.request_payload::<ClimateSettingSchedulesResponse>(request)
            .await
            .map(|r| r.climate_setting_schedules)
    }

    #[instrument(skip(self, params), fields(id = %params.climate_setting_schedule_id))]
    pub async fn get_climate_setting_schedule(
        &self,
        params: &GetClimateSettingScheduleRequest,
    ) -> Result<ClimateSettingSchedule> {
        let request =
            RequestDescriptor::get(format!("{}/get", SCHEDULES_PATH)).with_params(params)?;
        self.request_payload::<ClimateSettingScheduleResponse>(request)
            .await
            .map(|r| r.climate_setting_schedule)
    }

    #[instrument(skip(self, params), fields(device_id = %params.device_id))]
    pub async fn create_climate_setting_schedule(
        &self,
        params: &CreateClimateSettingScheduleRequest,
    ) -> Result<ClimateSettingSchedule> {
        let request =
            RequestDescriptor::post(format!("{}/create", SCHEDULES_PATH)).with_params(params)?;
        self.request_payload::<ClimateSettingScheduleResponse>(request)
            .await
            .map(|r| r.climate_setting_schedule)
    }

    #[instrument(skip(self, params), fields(id = %params.climate_setting_schedule_id))]
    pub async fn update_climate_setting_schedule(
        &self,
        params: &UpdateClimateSettingScheduleRequest,
    ) -> Result<ClimateSettingSchedule> {
        let request =
            RequestDescriptor::patch(format!("{}/update", SCHEDULES_PATH)).with_params(params)?;
        self.request_payload::<ClimateSettingScheduleResponse>(request)
            .await
            .map(|r| r.climate_setting_schedule)
    }

    #[instrument(skip(self))]
    pub async fn delete_climate_setting_schedule(
        &self,
        climate_setting_schedule_id: &str,
    ) -> Result<()> {
        let params = DeleteClimateSettingScheduleRequest {
            climate_setting_schedule_id: climate_setting_schedule_id.to_string(),
        };
        let request =
            RequestDescriptor::delete(format!("{}/delete", SCHEDULES_PATH)).with_params(&params)?;
        self.request_payload::<EmptyResponse>(request).await?;
        Ok(())
    }
}
