use firehose::error::{FirehoseError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run `f` behind a spinner that disappears when it returns
///
/// Stands in for the full-screen loading indicator.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = spinner(message);
    let result = f();
    spinner.finish_and_clear();
    result
}

/// Run a request behind a spinner and leave a ✓ or ✗ line behind
pub fn request_with_spinner<T>(message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = spinner(message);
    let result = f();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("✓ {}", message)),
        Err(e) => spinner.finish_with_message(format!("✗ {} ({})", message, categorize_error(e))),
    }

    result
}

/// Truncate URL to specified length with ellipsis
pub fn truncate_url(url: &str, max_len: usize) -> String {
    if url.chars().count() > max_len {
        let keep = max_len.saturating_sub(3); // Reserve 3 chars for "..."
        let truncated: String = url.chars().take(keep).collect();
        format!("{}...", truncated)
    } else {
        url.to_string()
    }
}

/// Short reason for a failed request
pub fn categorize_error(error: &FirehoseError) -> &'static str {
    match error.status() {
        Some(401) => return "not logged in",
        Some(403) => return "forbidden",
        Some(404) => return "not found",
        Some(status) if status >= 500 => return "server error",
        Some(_) => return "rejected",
        None => {}
    }

    match error {
        FirehoseError::Http(err) if err.is_timeout() => "timeout",
        FirehoseError::Http(err) if err.is_connect() => "connection error",
        FirehoseError::Http(_) => "network error",
        FirehoseError::Json(_) => "unexpected response",
        FirehoseError::Auth(_) => "not logged in",
        _ => "request failed",
    }
}
