//! Application state shared by all request handlers.
//!
//! The quote store is opened once at startup, handed to every handler
//! through axum's `State` extractor, and closed on graceful shutdown.

use std::sync::Arc;

use roofquote_core::storage::QuoteRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cheap to clone: handlers receive a clone holding the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Quote repository.
    pub quote_repo: Arc<dyn QuoteRepository>,
}

impl AppState {
    /// Creates state around an already opened repository.
    pub fn with_repository(quote_repo: Arc<dyn QuoteRepository>) -> Self {
        Self { quote_repo }
    }

    /// Opens the SQLite store at the configured path.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Quote store ready");
        Ok(Self::with_repository(Arc::new(repo)))
    }

    /// Creates state backed by an in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::with_repository(Arc::new(repo))
    }

    /// Releases the store handle. Errors are logged, not returned, since
    /// this runs after the server has stopped accepting requests.
    pub async fn close(&self) {
        match self.quote_repo.close().await {
            Ok(()) => tracing::info!("Quote store closed"),
            Err(err) => tracing::error!(error = %err, "Failed to close quote store"),
        }
    }
}
