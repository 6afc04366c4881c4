// Suite configuration
//
// Base URL, credentials, browser selection and the destructive gate live in
// one record that is passed explicitly to the runner and to the scenarios.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default wait timeout for signature elements and actions (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default poll interval while waiting for an element (100ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Username of the pre-existing vouched profile used by the search scenarios
pub const DEFAULT_FEATURED_USERNAME: &str = "MozilliansUser";

/// Which Playwright browser to launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
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
            other => Err(Error::InvalidConfig(format!("unknown browser '{}'", other))),
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        };
        f.write_str(name)
    }
}

/// Login credentials of the vouched test account
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for one run of the suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Root of the site under test
    pub base_url: Url,

    /// Vouched account used by `Home::login`
    #[serde(default)]
    pub credentials: Credentials,

    #[serde(default)]
    pub browser: BrowserKind,

    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Upper bound for every wait, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Allow scenarios that create or change data on the site
    #[serde(default)]
    pub destructive: bool,

    /// Seed for random choices; entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default = "default_featured_username")]
    pub featured_username: String,
}

fn default_headless() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_featured_username() -> String {
    DEFAULT_FEATURED_USERNAME.to_string()
}

impl SuiteConfig {
    /// Creates a configuration with defaults for everything but the site and account.
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            browser: BrowserKind::default(),
            headless: default_headless(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            destructive: false,
            seed: None,
            featured_username: default_featured_username(),
        }
    }

    /// Loads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;
        let config: SuiteConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::from(e).context(format!("parsing {}", path.display())))?;
        Ok(config)
    }

    /// Builds a configuration from `MOZILLIANS_*` environment variables alone.
    ///
    /// `MOZILLIANS_BASE_URL` is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SuiteConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("MOZILLIANS_BASE_URL")
            .ok_or_else(|| Error::InvalidConfig("MOZILLIANS_BASE_URL is not set".to_string()))?;
        let config = SuiteConfig::new(Url::parse(&base_url)?, Credentials::default());
        config.with_overrides(lookup)
    }

    /// Applies `MOZILLIANS_*` environment variables on top of this configuration.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies variables from `lookup` on top of this configuration.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("MOZILLIANS_BASE_URL") {
            self.base_url = Url::parse(&url)?;
        }
        if let Some(email) = lookup("MOZILLIANS_EMAIL") {
            self.credentials.email = email;
        }
        if let Some(password) = lookup("MOZILLIANS_PASSWORD") {
            self.credentials.password = password;
        }
        if let Some(browser) = lookup("MOZILLIANS_BROWSER") {
            self.browser = browser.parse()?;
        }
        if let Some(headless) = lookup("MOZILLIANS_HEADLESS") {
            self.headless = parse_flag("MOZILLIANS_HEADLESS", &headless)?;
        }
        if let Some(timeout) = lookup("MOZILLIANS_TIMEOUT_MS") {
            self.timeout_ms = parse_number("MOZILLIANS_TIMEOUT_MS", &timeout)?;
        }
        if let Some(destructive) = lookup("MOZILLIANS_DESTRUCTIVE") {
            self.destructive = parse_flag("MOZILLIANS_DESTRUCTIVE", &destructive)?;
        }
        if let Some(seed) = lookup("MOZILLIANS_SEED") {
            self.seed = Some(parse_number("MOZILLIANS_SEED", &seed)?);
        }
        Ok(self)
    }

    pub fn browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn featured_username(mut self, username: impl Into<String>) -> Self {
        self.featured_username = username.into();
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval_duration(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidConfig(format!(
                    "base_url must be http(s), got scheme '{}'",
                    other
                )));
            }
        }
        if self.credentials.email.trim().is_empty() || self.credentials.password.is_empty() {
            return Err(Error::InvalidConfig(
                "credentials need both an email and a password".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{} must be a number, got '{}'", key, value)))
}
