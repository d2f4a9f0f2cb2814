//! # Console configuration: `promptly.toml` and environment
//!
//! The console needs two external locations: where the REST API lives and
//! where the hosted subscription-management portal lives.
//!
//! ```toml
//! [api]
//! base_url = "https://app.example.com"   # omit to use the page origin
//!
//! [billing]
//! subscription_management_url = "https://billing.example.com/p/login/abc"
//! ```
//!
//! The same settings can come from the environment
//! ([`API_BASE_URL_VAR`], [`SUBSCRIPTION_MANAGEMENT_URL_VAR`]), read at runtime
//! on native targets via [`AppConfig::from_env`] or captured at compile time for
//! WASM builds via [`AppConfig::from_build_env`]. Empty values count as unset.
//!
//! All structs derive `Default`, so a missing file or environment leaves the
//! API on the page origin and hides the "Manage Subscription" action.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomainError;

pub const API_BASE_URL_VAR: &str = "PROMPTLY_API_BASE_URL";
pub const SUBSCRIPTION_MANAGEMENT_URL_VAR: &str = "PROMPTLY_SUBSCRIPTION_MANAGEMENT_URL";

/// Top-level console configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub billing: BillingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST API. `None` means "same origin as the page".
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Hosted portal the "Manage Subscription" action opens.
    #[serde(default)]
    pub subscription_management_url: Option<String>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = Some(url.into());
        self
    }

    pub fn with_subscription_management_url(mut self, url: impl Into<String>) -> Self {
        self.billing.subscription_management_url = Some(url.into());
        self
    }

    /// Looked up in the working directory of native builds.
    pub const FILE_NAME: &'static str = "promptly.toml";

    /// Missing sections and keys fall back to their defaults, so an empty
    /// `promptly.toml` is valid.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// `[api]` and `[billing]` tables; unset keys are omitted.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read settings from `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings captured from the environment when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                API_BASE_URL_VAR => option_env!("PROMPTLY_API_BASE_URL"),
                SUBSCRIPTION_MANAGEMENT_URL_VAR => option_env!("PROMPTLY_SUBSCRIPTION_MANAGEMENT_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api: ApiConfig {
                base_url: non_empty(API_BASE_URL_VAR),
            },
            billing: BillingConfig {
                subscription_management_url: non_empty(SUBSCRIPTION_MANAGEMENT_URL_VAR),
            },
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: AppConfig) -> Self {
        Self {
            api: ApiConfig {
                base_url: self.api.base_url.or(fallback.api.base_url),
            },
            billing: BillingConfig {
                subscription_management_url: self
                    .billing
                    .subscription_management_url
                    .or(fallback.billing.subscription_management_url),
            },
        }
    }
}

impl ApiConfig {
    pub fn url(&self) -> Result<Option<Url>, DomainError> {
        parse_optional_url(self.base_url.as_deref())
    }
}

impl BillingConfig {
    pub fn management_url(&self) -> Result<Option<Url>, DomainError> {
        parse_optional_url(self.subscription_management_url.as_deref())
    }
}

fn parse_optional_url(raw: Option<&str>) -> Result<Option<Url>, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    Url::parse(raw)
        .map(Some)
        .map_err(|e| DomainError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
}
