//! roofquote_client - CLI client for the roofquote API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RoofquoteClient;
pub use error::{ClientError, Result};
