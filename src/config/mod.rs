//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VERIFACE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::constants::{
    DEFAULT_COMPARATOR_URL, DEFAULT_DETECTOR_BACKEND, DEFAULT_MODEL_NAME, MIN_MATCHING_PHOTOS,
};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERIFACE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Shared secret checked on every verification request.
    pub api_secret: String,

    /// Base URL of the face comparison sidecar. Default: `http://localhost:5000`.
    pub comparator_url: String,

    /// Biometric model identity passed to the comparison backend.
    pub model_name: String,

    /// Face detector identity passed to the comparison backend.
    pub detector_backend: String,

    /// Minimum matching candidates required for a verified decision. Default: `2`.
    pub min_matching_photos: usize,
}

/// Insecure default secret used when `VERIFACE_API_SECRET` is not set.
pub const DEFAULT_API_SECRET: &str = "veriface-secret-change-me";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            api_secret: DEFAULT_API_SECRET.to_string(),
            comparator_url: DEFAULT_COMPARATOR_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            detector_backend: DEFAULT_DETECTOR_BACKEND.to_string(),
            min_matching_photos: MIN_MATCHING_PHOTOS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERIFACE_PORT";
    const ENV_BIND_ADDR: &'static str = "VERIFACE_BIND_ADDR";
    const ENV_API_SECRET: &'static str = "VERIFACE_API_SECRET";
    const ENV_COMPARATOR_URL: &'static str = "VERIFACE_COMPARATOR_URL";
    const ENV_MODEL_NAME: &'static str = "VERIFACE_MODEL_NAME";
    const ENV_DETECTOR_BACKEND: &'static str = "VERIFACE_DETECTOR_BACKEND";
    const ENV_MIN_MATCHING_PHOTOS: &'static str = "VERIFACE_MIN_MATCHING_PHOTOS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let api_secret = Self::parse_string_from_env(Self::ENV_API_SECRET, defaults.api_secret);
        let comparator_url =
            Self::parse_string_from_env(Self::ENV_COMPARATOR_URL, defaults.comparator_url);
        let model_name = Self::parse_string_from_env(Self::ENV_MODEL_NAME, defaults.model_name);
        let detector_backend =
            Self::parse_string_from_env(Self::ENV_DETECTOR_BACKEND, defaults.detector_backend);
        let min_matching_photos = Self::parse_usize_from_env(
            Self::ENV_MIN_MATCHING_PHOTOS,
            defaults.min_matching_photos,
        );

        Ok(Self {
            port,
            bind_addr,
            api_secret,
            comparator_url,
            model_name,
            detector_backend,
            min_matching_photos,
        })
    }

    /// Validates basic invariants (does not contact the comparator).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.comparator_url.starts_with("http://") && !self.comparator_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidComparatorUrl {
                value: self.comparator_url.clone(),
            });
        }

        if self.min_matching_photos == 0 {
            return Err(ConfigError::InvalidMinMatching {
                value: self.min_matching_photos,
            });
        }

        Ok(())
    }

    /// Returns `true` when the API secret was left at its insecure default.
    pub fn uses_default_secret(&self) -> bool {
        self.api_secret == DEFAULT_API_SECRET
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
