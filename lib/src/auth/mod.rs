//! Sign-in and the access token every data request carries

pub mod oauth;
pub mod token;

pub use oauth::{log_in, AuthError};
pub use token::{AuthContext, FileTokenStore, MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};
