use contracts::stats::Stats;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch the public aggregate counters (total events, total users).
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.expect_data(
            self.http.get(self.url("/users/stats")),
            "Failed to fetch statistics",
        )
        .await
    }
}
