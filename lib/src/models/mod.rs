pub mod bookmark;
pub mod errors;
pub mod tag;
