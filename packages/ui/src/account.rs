//! Read-only account context for the UI.
//!
//! The account service owns profile, flags and organization; this module
//! only fetches them once on mount and publishes the result to descendants.

use api::{ApiError, Backend};
use dioxus::prelude::*;
use domain::{Organization, Profile, ProfileFlags};
use tracing::{debug, warn};

use crate::use_backend;

#[derive(Debug, Clone, PartialEq)]
pub struct AccountState {
    pub profile: Option<Profile>,
    /// `None` until the flags load; a failed fetch leaves it unset.
    pub flags: Option<ProfileFlags>,
    pub organization: Option<Organization>,
    pub loading: bool,
    /// Message of the last failed fetch, if any.
    pub error: Option<String>,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            profile: None,
            flags: None,
            organization: None,
            loading: true,
            error: None,
        }
    }
}

impl AccountState {
    pub fn is_organization_member(&self) -> bool {
        self.flags.is_some_and(|f| f.is_organization_member)
    }

    pub fn email(&self) -> String {
        self.profile
            .as_ref()
            .map(|p| p.user_email.clone())
            .unwrap_or_default()
    }
}

/// Fetch flags, then the profile, then the organization for members only.
///
/// Partial failures keep whatever did load and record the first error.
pub async fn load_account<B: Backend>(backend: &B) -> AccountState {
    let mut state = AccountState {
        loading: false,
        ..AccountState::default()
    };
    match backend.profile_flags().await {
        Ok(flags) => state.flags = Some(flags),
        Err(e) => record_failure(&mut state, "profile flags", e),
    }
    match backend.profile().await {
        Ok(profile) => state.profile = Some(profile),
        Err(e) => record_failure(&mut state, "profile", e),
    }
    if state.is_organization_member() {
        match backend.organization().await {
            Ok(org) => state.organization = Some(org),
            Err(e) => record_failure(&mut state, "organization", e),
        }
    }

    debug!(
        member = state.is_organization_member(),
        loaded = state.profile.is_some(),
        "account state loaded"
    );
    state
}

fn record_failure(state: &mut AccountState, what: &str, e: ApiError) {
    warn!("Failed to load {what}: {e}");
    state.error.get_or_insert_with(|| e.to_string());
}

/// Get the current account state.
pub fn use_account() -> Signal<AccountState> {
    use_context::<Signal<AccountState>>()
}

/// Provider component that loads account state on mount.
/// Wrap any view that reads [`use_account`] with this component.
#[component]
pub fn AccountProvider(children: Element) -> Element {
    let backend = use_backend();
    let mut account = use_signal(AccountState::default);

    let _ = use_resource(move || {
        let backend = backend.clone();
        async move {
            account.set(load_account(&backend).await);
        }
    });

    use_context_provider(|| account);

    rsx! {
        {children}
    }
}
