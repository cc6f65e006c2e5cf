use client::ApiClient;
use contracts::stats::Stats;
use leptos::prelude::*;

/// Read-only aggregate counters for the landing page. Refreshed by
/// re-fetching; never mutated client-side.
#[derive(Clone)]
pub struct StatsStore {
    api: ApiClient,
    pub stats: RwSignal<Option<Stats>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StatsStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            stats: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub async fn fetch_stats(&self) {
        self.loading.set(true);
        self.error.set(None);

        match self.api.stats().await {
            Ok(stats) => {
                self.stats.set(Some(stats));
                self.loading.set(false);
            }
            Err(e) => {
                log::error!("fetch stats failed: {e}");
                self.error.set(Some(e.to_string()));
                self.loading.set(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_stats_populates_the_snapshot() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/users/stats");
                then.status(200).json_body(json!({
                    "type": "success",
                    "data": {"total_events": 100, "total_users": 20}
                }));
            })
            .await;

        let store = StatsStore::new(ApiClient::new(server.base_url()));
        store.fetch_stats().await;

        let stats = store.stats.get_untracked().unwrap();
        assert_eq!(stats.total_events, 100);
        assert_eq!(stats.total_users, 20);
        assert!(!store.loading.get_untracked());
    }

    #[tokio::test]
    async fn fetch_stats_failure_leaves_the_snapshot_alone() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/users/stats");
                then.status(500).body("");
            })
            .await;

        let store = StatsStore::new(ApiClient::new(server.base_url()));
        store.stats.set(Some(Stats {
            total_events: 7,
            total_users: 3,
        }));

        store.fetch_stats().await;

        assert_eq!(store.stats.get_untracked().unwrap().total_events, 7);
        assert!(store.error.get_untracked().is_some());
    }
}
