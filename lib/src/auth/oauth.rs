use crate::error::FirehoseError;
use crate::http::{Body, Request, Transport};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

const TOKEN_PATH: &str = "oauth/token";

/// Why signing in failed, worded for the sign-in form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server refused the credentials and said why
    #[error("{0}")]
    Rejected(String),

    #[error("An error occurred while logging in. Please try again.")]
    Failed,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a username and password for an access token
pub fn log_in<T: Transport + ?Sized>(
    transport: &T,
    username: &str,
    password: &str,
) -> std::result::Result<String, AuthError> {
    let body = json!({
        "grant_type": "password",
        "username": username,
        "password": password,
    });
    debug!("Requesting access token for {}", username);

    match transport.execute(&Request::post(TOKEN_PATH, Body::Json(body))) {
        Ok(Some(value)) => serde_json::from_value::<TokenResponse>(value)
            .map(|response| response.access_token)
            .map_err(|err| {
                warn!("Unexpected token response: {}", err);
                AuthError::Failed
            }),
        Ok(None) => {
            warn!("Empty token response");
            Err(AuthError::Failed)
        }
        Err(FirehoseError::Api {
            status,
            detail: Some(detail),
        }) if (400..500).contains(&status) => Err(AuthError::Rejected(detail)),
        Err(err) => {
            warn!("Sign-in failed: {}", err);
            Err(AuthError::Failed)
        }
    }
}
