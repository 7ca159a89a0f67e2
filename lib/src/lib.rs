pub mod api;
pub mod auth;
pub mod browser;
pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod jsonapi;
pub mod list;
pub mod models;
pub mod tag_list;
pub mod tags;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types for convenience
pub use error::FirehoseError;
