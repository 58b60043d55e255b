//! Client configuration: base URL, API key and request timeout.
//!
//! [`SharedConfig`] is a cloneable handle guarded by a reader/writer lock.
//! The client reads it on every call, so a key or URL change between calls
//! takes effect on the next request. [`SharedConfig::global`] is the
//! process-wide instance, created on first use from the environment and
//! never torn down.
//!
//! | Env Var | Description |
//! |---------|-------------|
//! | `OPENFIGI_API_KEY` | Sent as `X-OPENFIGI-APIKEY` when set |
//! | `OPENFIGI_BASE_URL` | Overrides `https://api.openfigi.com/v3` |

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const DEFAULT_BASE_URL: &str = "https://api.openfigi.com/v3";
pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const API_KEY_ENV: &str = "OPENFIGI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENFIGI_BASE_URL";

/// Plain configuration values.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `OPENFIGI_BASE_URL` / `OPENFIGI_API_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = non_empty_env(BASE_URL_ENV) {
            config.base_url = normalize_base_url(base_url);
        }
        config.api_key = non_empty_env(API_KEY_ENV);
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|key| !key.is_empty());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}

/// Lock-guarded configuration shared between a client and its callers.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<ClientConfig>>,
}

static GLOBAL: OnceLock<SharedConfig> = OnceLock::new();

impl SharedConfig {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Process-wide configuration, initialized from the environment.
    pub fn global() -> &'static SharedConfig {
        GLOBAL.get_or_init(|| Self::new(ClientConfig::from_env()))
    }

    // A writer cannot leave the config half-updated, so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, ClientConfig> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClientConfig> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ClientConfig {
        self.read().clone()
    }

    pub fn base_url(&self) -> String {
        self.read().base_url.clone()
    }

    pub fn set_base_url(&self, base_url: impl Into<String>) {
        self.write().base_url = normalize_base_url(base_url.into());
    }

    pub fn api_key(&self) -> Option<String> {
        self.read().api_key.clone()
    }

    /// An empty key clears the credential.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.write().api_key = Some(api_key.into()).filter(|key| !key.is_empty());
    }

    pub fn clear_api_key(&self) {
        self.write().api_key = None;
    }

    pub fn timeout_ms(&self) -> u64 {
        self.read().timeout_ms
    }

    pub fn set_timeout_ms(&self, timeout_ms: u64) {
        self.write().timeout_ms = timeout_ms;
    }
}

impl From<ClientConfig> for SharedConfig {
    fn from(config: ClientConfig) -> Self {
        Self::new(config)
    }
}

/// Set the base URL of the process-wide configuration.
pub fn set_api_base_url(base_url: impl Into<String>) {
    SharedConfig::global().set_base_url(base_url);
}

pub fn api_base_url() -> String {
    SharedConfig::global().base_url()
}

/// Set the API key of the process-wide configuration.
pub fn set_api_key(api_key: impl Into<String>) {
    SharedConfig::global().set_api_key(api_key);
}

pub fn api_key() -> Option<String> {
    SharedConfig::global().api_key()
}
