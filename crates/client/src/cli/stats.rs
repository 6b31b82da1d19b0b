//! Statistics CLI commands.

use clap::{Args, Parser, Subcommand};

use roofquote_core::quote::StatsFilter;

/// Statistics commands.
#[derive(Debug, Parser)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub action: StatsAction,
}

/// Available statistics.
#[derive(Debug, Subcommand)]
pub enum StatsAction {
    /// Total projects, average roof size and most common roof type.
    Summary(FilterArgs),
    /// Project count per state.
    ByState(FilterArgs),
    /// Average roof size per roof type.
    RoofSizeType(FilterArgs),
    /// Project count per month.
    MonthlyTrend(FilterArgs),
}

/// Filters shared by every statistic.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only quotes in this state.
    #[arg(long)]
    pub state: Option<String>,
    /// Only quotes with this roof type.
    #[arg(long)]
    pub roof_type: Option<String>,
    /// Only quotes whose project date falls in this year.
    #[arg(long)]
    pub year: Option<String>,
}

impl FilterArgs {
    pub fn into_filter(self) -> StatsFilter {
        StatsFilter {
            state: self.state,
            roof_type: self.roof_type,
            year: self.year,
        }
    }
}
