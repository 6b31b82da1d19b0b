//! Quote CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use roofquote_core::quote::{NewQuote, QuoteFilter};

/// Quote commands.
#[derive(Debug, Parser)]
pub struct QuotesCommand {
    #[command(subcommand)]
    pub action: QuotesAction,
}

/// Available quote actions.
#[derive(Debug, Subcommand)]
pub enum QuotesAction {
    /// Submit a new quote.
    Submit(SubmitArgs),
    /// List quotes.
    List {
        /// Only quotes in this state (exact match).
        #[arg(long)]
        state: Option<String>,
        /// Only quotes with this roof type (exact match).
        #[arg(long)]
        roof_type: Option<String>,
    },
}

/// Fields of a quote submission. All optional.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Contractor name.
    #[arg(long)]
    pub contractor_name: Option<String>,
    /// Company name.
    #[arg(long)]
    pub company: Option<String>,
    /// Roof area.
    #[arg(long)]
    pub roof_size: Option<i64>,
    /// Roof type, e.g. "Metal".
    #[arg(long)]
    pub roof_type: Option<String>,
    /// City.
    #[arg(long)]
    pub city: Option<String>,
    /// State.
    #[arg(long)]
    pub state: Option<String>,
    /// Project date (YYYY-MM-DD).
    #[arg(long)]
    pub project_date: Option<NaiveDate>,
}

impl SubmitArgs {
    pub fn into_new_quote(self) -> NewQuote {
        NewQuote {
            contractor_name: self.contractor_name,
            company: self.company,
            roof_size: self.roof_size.map(Into::into),
            roof_type: self.roof_type,
            city: self.city,
            state: self.state,
            project_date: self
                .project_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Builds the list filter from CLI flags.
pub fn list_filter(state: Option<String>, roof_type: Option<String>) -> QuoteFilter {
    QuoteFilter { state, roof_type }
}
