//! Configuration for the Idcheck API client
//!
//! Supports builder-style and environment-based configuration with
//! sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Base URL for the EU region
const EU_API_URL: &str = "https://api.idcheck.com/v3/";

/// Base URL for the US region
const US_API_URL: &str = "https://api.us.idcheck.com/v3/";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Supported API regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    /// European region (default)
    Eu,
    /// United States region
    Us,
}

impl Default for Region {
    fn default() -> Self {
        Self::Eu
    }
}

impl Region {
    /// Base URL for this region
    #[must_use]
    pub fn api_url(self) -> &'static str {
        match self {
            Self::Eu => EU_API_URL,
            Self::Us => US_API_URL,
        }
    }
}

impl FromStr for Region {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        match s.to_uppercase().as_str() {
            "EU" => Ok(Self::Eu),
            "US" => Ok(Self::Us),
            other => Err(ApiError::UnknownRegion(other.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eu => f.write_str("EU"),
            Self::Us => f.write_str("US"),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token used for the `Authorization` header (required)
    pub api_token: String,
    /// Region whose base URL requests are issued against
    pub region: Region,
    /// Explicit base URL override; takes precedence over `region`
    pub api_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the given API token and defaults for
    /// everything else (EU region, 30 second timeout).
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            region: Region::default(),
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `IDCHECK_API_TOKEN`: API token (required)
    /// - `IDCHECK_REGION`: region selector, `EU` or `US` (optional)
    /// - `IDCHECK_API_URL`: explicit base URL override (optional)
    /// - `IDCHECK_TIMEOUT_SECS`: request timeout in seconds (optional)
    pub fn from_env() -> ApiResult<Self> {
        let api_token = env::var("IDCHECK_API_TOKEN").map_err(|_| ApiError::MissingApiToken)?;

        let region = match env::var("IDCHECK_REGION") {
            Ok(value) => value.parse()?,
            Err(_) => Region::default(),
        };

        let api_url = env::var("IDCHECK_API_URL").ok();

        let timeout = env::var("IDCHECK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self {
            api_token,
            region,
            api_url,
            timeout,
        })
    }

    /// Builder-style method to set the region
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Builder-style method to override the base URL
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL requests will be issued against: the explicit override
    /// when set, otherwise the region's URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or_else(|| self.region.api_url())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_token.is_empty() {
            return Err(ApiError::MissingApiToken);
        }

        if let Some(ref url) = self.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(
                    "api_url must start with http:// or https://",
                ));
            }
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_eu() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url(), "https://api.idcheck.com/v3/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!("us".parse::<Region>().unwrap(), Region::Us);
        assert!(matches!(
            "XX".parse::<Region>(),
            Err(ApiError::UnknownRegion(r)) if r == "XX"
        ));
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let config = ClientConfig::new("");
        assert!(matches!(config.validate(), Err(ApiError::MissingApiToken)));
    }

    #[test]
    fn test_api_url_override_wins() {
        let config = ClientConfig::new("token")
            .with_region(Region::Us)
            .with_api_url("https://api.eu-west.example.com/v3/");
        assert_eq!(config.base_url(), "https://api.eu-west.example.com/v3/");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("token")
            .with_region(Region::Us)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url(), "https://api.us.idcheck.com/v3/");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig::new("token").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
