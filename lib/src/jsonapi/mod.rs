//! Minimal JSON:API resource client
//!
//! Requests go through a [`crate::http::Transport`]; responses are decoded into
//! [`Document`]s whose `data` is typed by the caller.

mod client;
mod document;
mod query;

pub use client::*;
pub use document::*;
pub use query::*;
