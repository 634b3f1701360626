//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `NAIA_HOST` - Bind address (default: 127.0.0.1)
//! - `NAIA_PORT` - Listen port (default: 3000)
//! - `NAIA_BASE_URL` - Public URL; `https://` enables secure cookies (default: <http://localhost:3000>)
//! - `NAIA_CART_STORAGE_KEY` - Name of the cart slot in the visitor session (default: naia-cart)
//! - `NAIA_CART_TTL_DAYS` - Days of inactivity before a stored cart expires (default: 30)
//! - `NAIA_TOAST_DURATION_MS` - How long add-to-cart toasts stay visible (default: 3000)
//! - `NAIA_STATIC_DIR` - Directory served under `/static` and `/assets` (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Default name of the session slot holding the cart.
pub const DEFAULT_CART_STORAGE_KEY: &str = "naia-cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory with CSS, JS and product images
    pub static_dir: PathBuf,
    /// Cart persistence and notification settings
    pub cart: CartConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Cart persistence and notification configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Session key the line items are stored under
    pub storage_key: String,
    /// Days of inactivity before the session (and cart) expires
    pub ttl_days: u32,
    /// Toast display duration in milliseconds
    pub toast_duration_ms: u64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_STORAGE_KEY.to_string(),
            ttl_days: 30,
            toast_duration_ms: 3000,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from("crates/storefront/static"),
            cart: CartConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let cart_defaults = CartConfig::default();

        let cart = CartConfig {
            storage_key: lookup("NAIA_CART_STORAGE_KEY")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(cart_defaults.storage_key),
            ttl_days: parse_or(&lookup, "NAIA_CART_TTL_DAYS", cart_defaults.ttl_days)?,
            toast_duration_ms: parse_or(
                &lookup,
                "NAIA_TOAST_DURATION_MS",
                cart_defaults.toast_duration_ms,
            )?,
        };

        Ok(Self {
            host: parse_or(&lookup, "NAIA_HOST", defaults.host)?,
            port: parse_or(&lookup, "NAIA_PORT", defaults.port)?,
            base_url: lookup("NAIA_BASE_URL").unwrap_or(defaults.base_url),
            static_dir: lookup("NAIA_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            cart,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_or(&lookup, "SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?,
            sentry_traces_sample_rate: parse_or(
                &lookup,
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.sentry_traces_sample_rate,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, falling back to `default` when absent.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.cart.storage_key, "naia-cart");
        assert_eq!(config.cart.toast_duration_ms, 3000);
        assert_eq!(config.cart.ttl_days, 30);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("NAIA_HOST", "0.0.0.0"),
            ("NAIA_PORT", "8080"),
            ("NAIA_BASE_URL", "https://naia.example"),
            ("NAIA_CART_STORAGE_KEY", "cart-v2"),
            ("NAIA_TOAST_DURATION_MS", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.cart.storage_key, "cart-v2");
        assert_eq!(config.cart.toast_duration_ms, 5000);
        assert!(config.is_secure());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("NAIA_PORT", "eighty")]));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "NAIA_PORT"));
    }

    #[test]
    fn test_blank_storage_key_falls_back() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("NAIA_CART_STORAGE_KEY", "  ")])).unwrap();
        assert_eq!(config.cart.storage_key, DEFAULT_CART_STORAGE_KEY);
    }

    #[test]
    fn test_empty_sentry_dsn_is_ignored() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
