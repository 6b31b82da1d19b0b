mod filters;
mod stats;
mod types;

pub use filters::{Condition, QuoteFilter, StatsFilter};
pub use stats::{round_to_cents, FilterOptions, SummaryStats, NO_ROOF_TYPE, NULL_GROUP_KEY};
pub use types::{NewQuote, Quote, RoofSize};
