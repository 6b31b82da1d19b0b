//! Quote and filter API operations.

use serde::{Deserialize, Serialize};

use super::RoofquoteClient;
use crate::error::Result;
use roofquote_core::quote::{FilterOptions, NewQuote, Quote, QuoteFilter};

/// Confirmation returned by a submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

impl RoofquoteClient {
    /// Submit a new quote.
    pub async fn submit_quote(&self, quote: &NewQuote) -> Result<SubmitResponse> {
        let response = self
            .client
            .post(self.url("/api/quotes"))
            .json(quote)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List quotes, optionally filtered by state and roof type.
    pub async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        let response = self
            .client
            .get(self.url("/api/quotes"))
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Distinct states, roof types and project dates.
    pub async fn filters(&self) -> Result<FilterOptions> {
        let response = self.client.get(self.url("/api/filters")).send().await?;
        self.handle_response(response).await
    }
}
