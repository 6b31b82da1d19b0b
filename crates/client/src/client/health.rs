//! Health check operations.

use super::RoofquoteClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Readiness probe result.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyStatus {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoofquoteClient {
    /// Liveness probe. Returns true when the server answers 200.
    pub async fn health_live(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Readiness probe. A 503 still carries a status body, so it is decoded
    /// rather than treated as an error.
    pub async fn health_ready(&self) -> Result<ReadyStatus> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        self.handle_response(response).await
    }
}
