use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "FIREHOSE_ACCESS_TOKEN";

/// Where the access token survives between runs
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<S: TokenStore + ?Sized> TokenStore for Box<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<()> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Token kept in a file named after [`ACCESS_TOKEN_KEY`]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(ACCESS_TOKEN_KEY),
        }
    }

    /// Store in the user data directory
    pub fn in_data_dir() -> Self {
        Self::new(crate::utils::get_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let token = fs::read_to_string(&self.path)?;
        let token = token.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // a poisoned slot still holds a usable token
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Who is signed in, created at start-up and passed to whatever fetches data
///
/// The persisted token is read once, on first use.
#[derive(Debug)]
pub struct AuthContext<S> {
    store: S,
    token: Option<String>,
    loaded: bool,
}

impl<S: TokenStore> AuthContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            token: None,
            loaded: false,
        }
    }

    /// Start with a known token and skip reading the store
    pub fn with_token(store: S, token: Option<String>) -> Self {
        Self {
            store,
            token,
            loaded: true,
        }
    }

    /// Read the stored token unless that already happened
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.token = self.store.load()?;
        self.loaded = true;
        debug!(
            "Loaded access token: {}",
            if self.token.is_some() { "present" } else { "none" }
        );
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_token_loaded(&self) -> bool {
        self.loaded
    }

    /// Persist first; the in-memory token only changes once that succeeded
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.store.save(token)?;
        self.token = Some(token.to_string());
        self.loaded = true;
        Ok(())
    }

    pub fn clear_token(&mut self) -> Result<()> {
        self.store.clear()?;
        self.token = None;
        Ok(())
    }

    /// Client carrying the current token, if any
    pub fn http_client(&self, config: &Config) -> Result<HttpClient> {
        let client = HttpClient::new(config)?;
        Ok(match &self.token {
            Some(token) => client.with_token(token.as_str()),
            None => client,
        })
    }
}
