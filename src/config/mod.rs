//! Configuration handling for the application.
//!
//! Values come from environment variables with sensible development
//! defaults, so the binary runs out of the box against the production CMS
//! while tests can point everything at local mock servers.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use url::Url;

/// Environment variable names. Public so tests can refer to them.
pub const ENV_CMS_ORIGIN: &str = "CMS_ORIGIN";
pub const ENV_SITE_BASE_URL: &str = "SITE_BASE_URL";
pub const ENV_SITE_NAME: &str = "SITE_NAME";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_REVALIDATE_SECS: &str = "REVALIDATE_SECS";
pub const ENV_EXCERPT_MAX_LEN: &str = "EXCERPT_MAX_LEN";

const DEFAULT_CMS_ORIGIN: &str = "https://campusify.io";
const DEFAULT_SITE_BASE_URL: &str = "https://blog.campusify.io";
const DEFAULT_SITE_NAME: &str = "Campusify Blog";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_REVALIDATE_SECS: u64 = 3600;
const DEFAULT_EXCERPT_MAX_LEN: usize = 160;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    cms_origin: Url,
    site_base_url: String,
    site_name: String,
    bind_addr: String,
    revalidate_secs: u64,
    excerpt_max_len: usize,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        cms_origin: Url,
        site_base_url: impl Into<String>,
        site_name: impl Into<String>,
        bind_addr: impl Into<String>,
        revalidate_secs: u64,
        excerpt_max_len: usize,
    ) -> Self {
        Self {
            cms_origin,
            site_base_url: site_base_url.into(),
            site_name: site_name.into(),
            bind_addr: bind_addr.into(),
            revalidate_secs,
            excerpt_max_len,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cms_origin = env::var(ENV_CMS_ORIGIN)
            .unwrap_or_else(|_| DEFAULT_CMS_ORIGIN.to_string())
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidValue {
                field: ENV_CMS_ORIGIN,
                reason: e.to_string(),
            })?;
        let site_base_url =
            env::var(ENV_SITE_BASE_URL).unwrap_or_else(|_| DEFAULT_SITE_BASE_URL.to_string());
        let site_name = env::var(ENV_SITE_NAME).unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string());
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let revalidate_secs = parse_env(ENV_REVALIDATE_SECS, DEFAULT_REVALIDATE_SECS)?;
        let excerpt_max_len = parse_env(ENV_EXCERPT_MAX_LEN, DEFAULT_EXCERPT_MAX_LEN)?;

        Ok(Self {
            cms_origin,
            site_base_url,
            site_name,
            bind_addr,
            revalidate_secs,
            excerpt_max_len,
        })
    }

    /// Origin of the headless CMS pages are fetched from.
    pub fn cms_origin(&self) -> &Url {
        &self.cms_origin
    }
    /// Public base URL of this site, used for canonical links.
    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }
    /// Human-readable site name used in titles.
    pub fn site_name(&self) -> &str {
        &self.site_name
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Revalidation interval handed to fronting caches via Cache-Control.
    pub fn revalidate_secs(&self) -> u64 {
        self.revalidate_secs
    }
    /// Default maximum excerpt length in characters.
    pub fn excerpt_max_len(&self) -> usize {
        self.excerpt_max_len
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cms_origin: DEFAULT_CMS_ORIGIN.parse().expect("default origin is valid"),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
            excerpt_max_len: DEFAULT_EXCERPT_MAX_LEN,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
