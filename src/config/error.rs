//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Comparator base URL is empty or not an http(s) URL.
    #[error("invalid comparator URL '{value}': expected an http(s) URL")]
    InvalidComparatorUrl { value: String },

    /// The minimum-matching-photos policy value is zero.
    #[error("invalid minimum matching photos '{value}': must be at least 1")]
    InvalidMinMatching { value: usize },
}
