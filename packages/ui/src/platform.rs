//! Platform-appropriate configuration, backend, billing portal and external
//! navigation.
//!
//! - **Web** (WASM): settings captured at build time, API on the page origin,
//!   external links opened with `window.open(url, "_blank")`.
//! - **Native**: settings from `.env` and the environment, then
//!   `promptly.toml` in the working directory, then the build-time values, API on [`DEFAULT_API_ORIGIN`], links opened in the
//!   system browser.

use api::HttpBackend;
use dioxus::prelude::*;
use domain::AppConfig;
use tracing::{error, info, warn};
use url::Url;

/// API origin used natively when nothing is configured.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3000/";

pub fn load_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::from_build_env()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        AppConfig::from_env()
            .or(read_config_file())
            .or(AppConfig::from_build_env())
    }
}

/// `promptly.toml` from the working directory; missing or malformed files
/// count as empty.
#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(AppConfig::FILE_NAME) else {
        return AppConfig::default();
    };
    AppConfig::from_toml(&contents).unwrap_or_else(|e| {
        warn!("Ignoring {}: {e}", AppConfig::FILE_NAME);
        AppConfig::default()
    })
}

/// Create the HTTP backend for `config`.
///
/// An unparsable `api.base_url` is logged and replaced by the default origin
/// rather than failing the whole app.
pub fn make_backend(config: &AppConfig) -> HttpBackend {
    let configured = match config.api.url() {
        Ok(url) => url,
        Err(e) => {
            warn!("Ignoring API base URL: {e}");
            None
        }
    };
    let base = configured
        .or_else(default_origin)
        .unwrap_or_else(|| Url::parse(DEFAULT_API_ORIGIN).expect("default API origin is a valid URL"));
    info!("Using API at {base}");
    HttpBackend::new(base)
}

#[cfg(target_arch = "wasm32")]
fn default_origin() -> Option<Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Url::parse(&origin).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> Option<Url> {
    None
}

/// The backend installed by the app root.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Parsed subscription-management portal, resolved once when the app starts.
///
/// `None` hides the "Manage Subscription" action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BillingPortal(pub Option<Url>);

impl BillingPortal {
    /// An invalid URL is logged here and treated as unset.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.billing.management_url() {
            Ok(url) => Self(url),
            Err(e) => {
                warn!("Subscription management link disabled: {e}");
                Self(None)
            }
        }
    }

    pub fn url(&self) -> Option<&Url> {
        self.0.as_ref()
    }
}

/// The billing portal installed by the app root.
pub fn use_billing_portal() -> BillingPortal {
    use_context::<BillingPortal>()
}

/// Open `url` in a new browsing context. No request is made by the console.
pub fn open_external(url: &str) {
    info!("Opening {url}");
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                    error!("Failed to open {url}: {e:?}");
                }
            }
            None => error!("No window to open {url} in"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = open::that(url) {
            error!("Failed to open browser: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_portal_from_config() {
        let config = AppConfig::new().with_subscription_management_url("https://billing.example.com/p");
        let portal = BillingPortal::from_config(&config);
        assert_eq!(portal.url().map(Url::as_str), Some("https://billing.example.com/p"));

        let invalid = AppConfig::new().with_subscription_management_url("not a url");
        assert_eq!(BillingPortal::from_config(&invalid), BillingPortal(None));
        assert_eq!(BillingPortal::from_config(&AppConfig::default()).url(), None);
    }

    #[test]
    fn test_backend_falls_back_on_invalid_base_url() {
        let backend = make_backend(&AppConfig::new().with_api_base_url("::nope::"));
        assert_eq!(backend.base_url().as_str(), DEFAULT_API_ORIGIN);

        let backend = make_backend(&AppConfig::new().with_api_base_url("https://api.example.com/console"));
        assert_eq!(backend.base_url().as_str(), "https://api.example.com/console/");
    }
}
