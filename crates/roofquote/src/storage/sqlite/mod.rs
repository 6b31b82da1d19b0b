//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of `QuoteRepository`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod filters;
mod repository;
mod schema;

pub use repository::SqliteRepository;
