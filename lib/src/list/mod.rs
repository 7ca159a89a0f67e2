//! Bookmark lists: the unread, read and per-tag collections
//!
//! [`BookmarkListController`] is the entry point. It keeps a [`ListState`]
//! consistent with the backend across loads, refreshes and per-record actions.

pub mod collection;
pub mod controller;
pub mod pagination;
pub mod query;
pub mod state;

pub use collection::BookmarkCollection;
pub use controller::BookmarkListController;
pub use pagination::Pagination;
pub use query::{BookmarkQuery, ListSource, Page};
pub use state::{
    ActionOutcome, ListState, ListStatus, LoadOutcome, LoadRequest, LoadResponse, LoadTarget,
    LoadTicket, LoadingIndicator, Mutation,
};
