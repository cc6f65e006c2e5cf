use client::ApiClient;
use contracts::events::{CreateEventRequest, EventDraft, EventPatch};
use leptos::prelude::*;

use crate::system::auth::AuthStore;

/// Event state container. Holds three independent, possibly-overlapping
/// collections (all public events, the user's own events, the user's
/// favorites), each with its own loading flag; `error` is shared.
///
/// Consistency after mutations comes from re-fetching the affected
/// collection rather than patching it locally, so backend-computed fields
/// (id, status, ownership) are never guessed at. A failed fetch leaves the
/// previous collection in place.
///
/// Overlapping calls to the same action are not coordinated: the
/// last-resolving response wins, regardless of request order.
#[derive(Clone)]
pub struct EventStore {
    api: ApiClient,
    auth: AuthStore,
    pub events: RwSignal<Vec<contracts::events::Event>>,
    pub my_events: RwSignal<Vec<contracts::events::Event>>,
    pub favorite_events: RwSignal<Vec<contracts::events::Event>>,
    pub loading: RwSignal<bool>,
    pub my_events_loading: RwSignal<bool>,
    pub favorites_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl EventStore {
    /// The auth store is only consulted for the current user id when
    /// creating events.
    pub fn new(api: ApiClient, auth: AuthStore) -> Self {
        Self {
            api,
            auth,
            events: RwSignal::new(Vec::new()),
            my_events: RwSignal::new(Vec::new()),
            favorite_events: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            my_events_loading: RwSignal::new(false),
            favorites_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch all publicly listed events.
    pub async fn fetch_events(&self) {
        self.loading.set(true);
        self.error.set(None);

        match self.api.events().await {
            Ok(events) => {
                self.events.set(events);
                self.loading.set(false);
            }
            Err(e) => {
                // The previous list stays visible; only the error changes.
                log::error!("fetch events failed: {e}");
                self.error.set(Some(e.to_string()));
                self.loading.set(false);
            }
        }
    }

    /// Fetch the events owned by the caller.
    pub async fn fetch_my_events(&self, token: &str) {
        self.my_events_loading.set(true);
        self.error.set(None);

        match self.api.my_events(token).await {
            Ok(events) => {
                self.my_events.set(events);
                self.my_events_loading.set(false);
            }
            Err(e) => {
                log::error!("fetch my events failed: {e}");
                self.error.set(Some(e.to_string()));
                self.my_events_loading.set(false);
            }
        }
    }

    /// Fetch the caller's favorite events.
    pub async fn fetch_favorite_events(&self, token: &str) {
        self.favorites_loading.set(true);
        self.error.set(None);

        match self.api.favorite_events(token).await {
            Ok(events) => {
                self.favorite_events.set(events);
                self.favorites_loading.set(false);
            }
            Err(e) => {
                log::error!("fetch favorite events failed: {e}");
                self.error.set(Some(e.to_string()));
                self.favorites_loading.set(false);
            }
        }
    }

    /// Create an event and re-fetch the owned list so it contains the new
    /// item with its server-assigned fields. Errors land in `error` and in
    /// the returned `Err`, letting form UIs stay open on failure.
    pub async fn create_event(&self, draft: EventDraft, token: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        let request = CreateEventRequest {
            draft,
            user_id: self.auth.user_id(),
        };

        match self.api.create_event(&request, token).await {
            Ok(_) => {
                self.fetch_my_events(token).await;
                self.loading.set(false);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("create event failed: {message}");
                self.error.set(Some(message.clone()));
                self.loading.set(false);
                Err(message)
            }
        }
    }

    /// Update an owned event by id; re-fetches the owned list on success.
    pub async fn update_event(
        &self,
        event_id: &str,
        patch: EventPatch,
        token: &str,
    ) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.update_event(event_id, &patch, token).await {
            Ok(_) => {
                self.fetch_my_events(token).await;
                self.loading.set(false);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("update event failed: {message}");
                self.error.set(Some(message.clone()));
                self.loading.set(false);
                Err(message)
            }
        }
    }

    /// Delete an owned event by id; re-fetches the owned list on success.
    pub async fn delete_event(&self, event_id: &str, token: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.delete_event(event_id, token).await {
            Ok(()) => {
                self.fetch_my_events(token).await;
                self.loading.set(false);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("delete event failed: {message}");
                self.error.set(Some(message.clone()));
                self.loading.set(false);
                Err(message)
            }
        }
    }

    /// Mark an event as favorite; re-fetches the favorites on success.
    pub async fn add_favorite(&self, event_id: &str, token: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.add_favorite(event_id, token).await {
            Ok(()) => {
                self.fetch_favorite_events(token).await;
                self.loading.set(false);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("add favorite failed: {message}");
                self.error.set(Some(message.clone()));
                self.loading.set(false);
                Err(message)
            }
        }
    }

    /// Remove an event from the favorites; re-fetches them on success.
    pub async fn remove_favorite(&self, event_id: &str, token: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.remove_favorite(event_id, token).await {
            Ok(()) => {
                self.fetch_favorite_events(token).await;
                self.loading.set(false);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("remove favorite failed: {message}");
                self.error.set(Some(message.clone()));
                self.loading.set(false);
                Err(message)
            }
        }
    }

    /// Reset the owned-events view. Called when the session closes.
    pub fn clear_my_events(&self) {
        self.my_events.set(Vec::new());
        self.my_events_loading.set(false);
    }
}
