//! Server configuration from environment variables.
//!
//! - `PORT`: listen port (default `8081`)
//! - `SITE_ROOT`: directory holding the built site; overrides the Leptos site
//!   root (`LEPTOS_SITE_ROOT`, default `target/site`) for both `/pkg` and the
//!   fallback file handler
//! - `RUST_LOG`: tracing filter (read by the subscriber, default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected a number in 1..=65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// `None` keeps the site root from the Leptos configuration.
    pub site_root: Option<PathBuf>,
}

impl Config {
    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset and blank
    /// variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a non-zero `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort { value: raw }),
            },
        };
        let site_root = var("SITE_ROOT").map(PathBuf::from);

        Ok(Self { port, site_root })
    }

    /// The site root every file route serves from, given the one Leptos
    /// was configured with.
    #[must_use]
    pub fn resolve_site_root(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}
