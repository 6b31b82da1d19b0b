use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::quote::{FilterOptions, NewQuote, Quote, QuoteFilter, StatsFilter, SummaryStats};

use super::Result;

/// Repository for quote persistence and the statistics derived from it.
///
/// Grouped statistics return `BTreeMap`s so keys always come out in
/// ascending order. NULL group values are keyed as
/// [`NULL_GROUP_KEY`](crate::quote::NULL_GROUP_KEY) and share that group with
/// stored values equal to the key.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Ensures the backing storage exists. Safe to call more than once.
    async fn init_schema(&self) -> Result<()>;

    /// Appends a quote and returns its assigned id.
    async fn create_quote(&self, quote: &NewQuote) -> Result<i64>;

    /// Lists quotes matching the filter, in insertion order.
    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>>;

    /// Distinct states, roof types and project dates currently stored.
    async fn filter_options(&self) -> Result<FilterOptions>;

    /// Count, mean roof size and most common roof type.
    async fn summary(&self, filter: &StatsFilter) -> Result<SummaryStats>;

    /// Number of quotes per state.
    async fn count_by_state(&self, filter: &StatsFilter) -> Result<BTreeMap<String, i64>>;

    /// Mean roof size per roof type, rounded to two decimals.
    async fn average_size_by_roof_type(
        &self,
        filter: &StatsFilter,
    ) -> Result<BTreeMap<String, f64>>;

    /// Number of quotes per `YYYY-MM` month.
    async fn monthly_trend(&self, filter: &StatsFilter) -> Result<BTreeMap<String, i64>>;

    /// Cheap round trip used by readiness probes.
    async fn ping(&self) -> Result<()>;

    /// Releases the underlying store handle.
    async fn close(&self) -> Result<()>;
}
