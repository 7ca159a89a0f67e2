use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("firehose");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/firehose");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("firehose");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Directory holding the persisted access token
pub fn get_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("FIREHOSE_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("firehose");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/firehose");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("firehose");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn url_host_regex() -> Option<&'static Regex> {
    static URL_HOST: OnceLock<Option<Regex>> = OnceLock::new();
    URL_HOST
        .get_or_init(|| Regex::new(r"^\w+://([^/]+\.\w+)").ok())
        .as_ref()
}

/// Host part of a link for display, without a leading `www.`
///
/// Returns `None` for strings that don't look like `scheme://host.tld`.
pub fn domain_for_url(url: &str) -> Option<String> {
    let captures = url_host_regex()?.captures(url)?;
    let host = captures.get(1)?.as_str();
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://google.com", Some("google.com"))]
    #[case("https://www.google.com", Some("google.com"))]
    #[case("https://calendar.google.com", Some("calendar.google.com"))]
    #[case("https://apple.com/iphone", Some("apple.com"))]
    #[case("http://localhost:3000/api", None)]
    #[case("Fred Flintstone", None)]
    #[case("", None)]
    fn test_domain_for_url(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(domain_for_url(url).as_deref(), expected);
    }
}
