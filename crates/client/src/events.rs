use contracts::events::{CreateEventRequest, Event, EventPatch, FavoriteRequest};

use crate::{bearer, ApiClient, ApiError};

impl ApiClient {
    /// List all events visible without authentication.
    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        self.expect_data(self.http.get(self.url("/events/")), "Failed to fetch events")
            .await
    }

    /// List the events owned by the authenticated user.
    pub async fn my_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.expect_data(
            self.http
                .get(self.url("/events/my-events"))
                .header("Authorization", bearer(token)),
            "Failed to fetch my events",
        )
        .await
    }

    /// Create an event. The backend assigns id, status and ownership.
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
        token: &str,
    ) -> Result<Event, ApiError> {
        self.expect_data(
            self.http
                .post(self.url("/events/"))
                .header("Authorization", bearer(token))
                .json(request),
            "Error creating event",
        )
        .await
    }

    /// Update an owned event by id.
    pub async fn update_event(
        &self,
        event_id: &str,
        patch: &EventPatch,
        token: &str,
    ) -> Result<Event, ApiError> {
        self.expect_data(
            self.http
                .put(self.url(&format!("/events/{event_id}")))
                .header("Authorization", bearer(token))
                .json(patch),
            "Error updating event",
        )
        .await
    }

    /// Delete an owned event by id.
    pub async fn delete_event(&self, event_id: &str, token: &str) -> Result<(), ApiError> {
        self.expect_ack(
            self.http
                .delete(self.url(&format!("/events/{event_id}")))
                .header("Authorization", bearer(token)),
            "Error deleting event",
        )
        .await
    }

    /// List the authenticated user's favorite events.
    pub async fn favorite_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.expect_data(
            self.http
                .get(self.url("/events/favorites"))
                .header("Authorization", bearer(token)),
            "Failed to fetch favorite events",
        )
        .await
    }

    /// Mark an event as favorite.
    pub async fn add_favorite(&self, event_id: &str, token: &str) -> Result<(), ApiError> {
        let request = FavoriteRequest {
            event_id: event_id.to_string(),
        };

        self.expect_ack(
            self.http
                .post(self.url("/events/favorites"))
                .header("Authorization", bearer(token))
                .json(&request),
            "Error adding favorite",
        )
        .await
    }

    /// Remove an event from the favorites.
    pub async fn remove_favorite(&self, event_id: &str, token: &str) -> Result<(), ApiError> {
        self.expect_ack(
            self.http
                .delete(self.url(&format!("/events/favorites/{event_id}")))
                .header("Authorization", bearer(token)),
            "Error removing favorite",
        )
        .await
    }
}
