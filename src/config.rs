//! Application configuration loaded from environment variables.
//!
//! Nothing here is secret: the Strava access token arrives with each
//! request and is never stored.

use crate::services::format::UnitSystem;
use crate::services::strava::DEFAULT_BASE_URL;
use std::env;

/// Strava's maximum page size for the activity list.
pub const MAX_ACTIVITIES_PER_PAGE: u32 = 200;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Strava REST API base URL
    pub strava_api_base_url: String,
    /// Activities fetched per dashboard request
    pub activities_per_page: u32,
    /// Display units when a request does not ask for any
    pub default_units: UnitSystem,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:3000".to_string(),
            strava_api_base_url: "http://127.0.0.1:9/api/v3".to_string(),
            activities_per_page: 30,
            default_units: UnitSystem::Metric,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 8080,
        };

        let activities_per_page = match lookup("ACTIVITIES_PER_PAGE") {
            Some(raw) => {
                let parsed: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("ACTIVITIES_PER_PAGE", raw.clone()))?;
                if parsed == 0 {
                    return Err(ConfigError::Invalid("ACTIVITIES_PER_PAGE", raw));
                }
                parsed.min(MAX_ACTIVITIES_PER_PAGE)
            }
            None => 30,
        };

        let default_units = match lookup("DEFAULT_UNITS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("DEFAULT_UNITS", raw))?,
            None => UnitSystem::Metric,
        };

        Ok(Self {
            port,
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            strava_api_base_url: lookup("STRAVA_API_BASE_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            activities_per_page,
            default_units,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
