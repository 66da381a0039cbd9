use tracing::instrument;

use crate::client::SeamClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::types::*;

impl SeamClient {
    /// List events, typically filtered by `since`
    #[instrument(skip(self, params))]
    pub async fn list_events(&self, params: &ListEventsRequest) -> Result<Vec<Event>> {
        let request = RequestDescriptor::get("/events/list").with_params(params)?;
        self.request_payload::<EventsResponse>(request)
            .await
            .map(|r| r.events)
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        let params = GetEventRequest {
            event_id: event_id.to_string(),
        };
        let request = RequestDescriptor::get("/events/get").with_params(&params)?;
        self.request_payload::<EventResponse>(request)
            .await
            .map(|r| r.event)
    }
}
