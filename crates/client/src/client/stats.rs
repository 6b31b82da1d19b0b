//! Statistics API operations.

use std::collections::BTreeMap;

use super::RoofquoteClient;
use crate::error::Result;
use roofquote_core::quote::{StatsFilter, SummaryStats};

impl RoofquoteClient {
    /// Totals, average roof size and most common roof type.
    pub async fn stats_summary(&self, filter: &StatsFilter) -> Result<SummaryStats> {
        self.get_stats("/api/stats/summary", filter).await
    }

    /// Quote count per state.
    pub async fn stats_by_state(&self, filter: &StatsFilter) -> Result<BTreeMap<String, i64>> {
        self.get_stats("/api/stats/by-state", filter).await
    }

    /// Mean roof size per roof type.
    pub async fn stats_roof_size_by_type(
        &self,
        filter: &StatsFilter,
    ) -> Result<BTreeMap<String, f64>> {
        self.get_stats("/api/stats/roof-size-type", filter).await
    }

    /// Quote count per month.
    pub async fn stats_monthly_trend(
        &self,
        filter: &StatsFilter,
    ) -> Result<BTreeMap<String, i64>> {
        self.get_stats("/api/stats/monthly-trend", filter).await
    }

    async fn get_stats<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        filter: &StatsFilter,
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
