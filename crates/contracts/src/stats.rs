use serde::{Deserialize, Serialize};

/// Aggregate counts from `GET /users/stats`. Read-only; refreshed by
/// re-fetching, never mutated client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_events: u64,
    pub total_users: u64,
}
