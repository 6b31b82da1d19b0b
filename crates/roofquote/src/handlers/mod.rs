pub mod error;
pub mod filters;
pub mod health;
pub mod quotes;
pub mod stats;

pub use error::AppError;
