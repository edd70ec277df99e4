// Suite configuration
//
// Layering, later wins:
// 1. Defaults (live store, headless Chromium, 5s expect timeout, standard_user)
// 2. JSON file named by SAUCEDEMO_CONFIG (missing fields keep their defaults)
// 3. Individual SAUCEDEMO_* environment variables
//
// A SuiteConfig is a plain value. Tests that need different settings build
// their own copy and pass it down; nothing here is global or mutable.

use crate::catalog::{PASSWORD, Route, STANDARD_USER};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Path of an optional JSON configuration file
pub const ENV_CONFIG: &str = "SAUCEDEMO_CONFIG";
pub const ENV_BASE_URL: &str = "SAUCEDEMO_BASE_URL";
/// `chromium`, `firefox` or `webkit`
pub const ENV_BROWSER: &str = "SAUCEDEMO_BROWSER";
pub const ENV_HEADLESS: &str = "SAUCEDEMO_HEADLESS";
pub const ENV_EXPECT_TIMEOUT_MS: &str = "SAUCEDEMO_EXPECT_TIMEOUT_MS";
pub const ENV_USERNAME: &str = "SAUCEDEMO_USERNAME";
pub const ENV_PASSWORD: &str = "SAUCEDEMO_PASSWORD";

/// Public deployment of the store
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com/";

/// Username/password pair submitted by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// A demo account with the shared demo password
    pub fn demo_user(username: &str) -> Self {
        Self::new(username, PASSWORD)
    }
}

impl Default for Credentials {
    /// The happy-path pair: `standard_user` / `secret_sauce`
    fn default() -> Self {
        Self::new(STANDARD_USER, PASSWORD)
    }
}

/// Browser engine to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!(
                "unknown browser '{}' (expected chromium, firefox or webkit)",
                other
            ))),
        }
    }
}

/// Settings shared by every session of a test run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub base_url: String,
    pub browser: BrowserKind,
    pub headless: bool,
    /// Timeout for expect() assertions, in milliseconds
    pub expect_timeout_ms: u64,
    /// Credentials used when a test does not pass its own
    pub credentials: Credentials,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser: BrowserKind::default(),
            headless: true,
            expect_timeout_ms: 5_000,
            credentials: Credentials::default(),
        }
    }
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(browser) = lookup(ENV_BROWSER) {
            config.browser = browser.parse()?;
        }
        if let Some(headless) = lookup(ENV_HEADLESS) {
            config.headless = parse_bool(ENV_HEADLESS, &headless)?;
        }
        if let Some(timeout) = lookup(ENV_EXPECT_TIMEOUT_MS) {
            config.expect_timeout_ms = timeout.trim().parse().map_err(|e| {
                Error::Config(format!("{} must be milliseconds: {}", ENV_EXPECT_TIMEOUT_MS, e))
            })?;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            config.credentials.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            config.credentials.password = password;
        }

        config.validate()?;
        tracing::debug!(
            "Suite config: base_url={} browser={:?} headless={}",
            config.base_url,
            config.browser,
            config.headless
        );
        Ok(config)
    }

    /// Reads a JSON configuration file; absent fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;
        let config: SuiteConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::from(e).context(format!("parsing {}", path.display())))?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_expect_timeout(mut self, timeout: Duration) -> Self {
        self.expect_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn expect_timeout(&self) -> Duration {
        Duration::from_millis(self.expect_timeout_ms)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must be http or https, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Absolute URL of a store page.
    pub fn url_for(&self, route: Route) -> Result<String> {
        let mut base = Url::parse(&self.base_url)?;
        // Without a trailing slash, join() would replace the last path segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(&route.path())?.to_string())
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be true or false, got '{}'",
            key, other
        ))),
    }
}
