//! roofquote_core - domain types and storage contracts for the roofquote service.
//!
//! Everything in this crate is pure: data types, filter normalization and
//! repository traits. I/O lives in the `roofquote` binary crate.

pub mod quote;
pub mod storage;
