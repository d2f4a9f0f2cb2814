//! # Account models read by the console
//!
//! These mirror the JSON returned by the account endpoints. The console never
//! mutates them; the account service owns their lifecycle and the UI only
//! re-fetches.
//!
//! | Struct | Endpoint | Represents |
//! |--------|----------|-----------|
//! | [`Profile`] | `GET /api/profiles/me` | The signed-in user's profile, including nested [`Credits`]. |
//! | [`ProfileFlags`] | `GET /api/profiles/me/flags` | Capability flags derived server-side from the profile. |
//! | [`Organization`] | `GET /api/org` | The organization the user belongs to, if any. |
//!
//! [`Tier`] is derived locally from [`ProfileFlags`] with a fixed precedence:
//! Pro over Basic over Free.

use serde::{Deserialize, Serialize};

/// Storage and credit balances attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Remaining credits in thousandths.
    #[serde(default)]
    pub available: i64,
    /// Bytes of storage in use.
    #[serde(default)]
    pub used_storage: u64,
    /// Bytes of storage included in the plan.
    #[serde(default)]
    pub total_storage: u64,
}

/// The signed-in user's profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub credits: Credits,
}

/// Boolean capability flags. Unknown flags from the server are ignored and
/// missing ones read as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFlags {
    #[serde(rename = "IS_ORGANIZATION_MEMBER", default)]
    pub is_organization_member: bool,
    #[serde(rename = "IS_PRO_SUBSCRIBER", default)]
    pub is_pro_subscriber: bool,
    #[serde(rename = "IS_BASIC_SUBSCRIBER", default)]
    pub is_basic_subscriber: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub name: String,
}

/// Subscription level shown to individual subscribers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    #[default]
    Free,
    Basic,
    Pro,
}

impl Tier {
    pub fn from_flags(flags: &ProfileFlags) -> Self {
        if flags.is_pro_subscriber {
            Tier::Pro
        } else if flags.is_basic_subscriber {
            Tier::Basic
        } else {
            Tier::Free
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Basic => "Basic",
            Tier::Pro => "Pro",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_precedence() {
        let mut flags = ProfileFlags::default();
        assert_eq!(Tier::from_flags(&flags), Tier::Free);

        flags.is_basic_subscriber = true;
        assert_eq!(Tier::from_flags(&flags), Tier::Basic);

        flags.is_pro_subscriber = true;
        assert_eq!(Tier::from_flags(&flags), Tier::Pro);

        flags.is_basic_subscriber = false;
        assert_eq!(Tier::from_flags(&flags), Tier::Pro);
        assert_eq!(Tier::Pro.to_string(), "Pro");
    }

    #[test]
    fn test_flags_wire_names() {
        let flags: ProfileFlags = serde_json::from_str(
            r#"{"IS_ORGANIZATION_MEMBER": true, "IS_PRO_SUBSCRIBER": false, "CAN_ADD_KEYS": true}"#,
        )
        .unwrap();
        assert!(flags.is_organization_member);
        assert!(!flags.is_pro_subscriber);
        assert!(!flags.is_basic_subscriber);
    }

    #[test]
    fn test_profile_with_missing_credits() {
        let profile: Profile = serde_json::from_str(r#"{"user_email": "a@b.co"}"#).unwrap();
        assert_eq!(profile.user_email, "a@b.co");
        assert_eq!(profile.credits, Credits::default());

        let profile: Profile = serde_json::from_str(
            r#"{"name": "Ada", "user_email": "ada@example.com", "credits": {"available": 12345, "used_storage": 10, "total_storage": 100, "free_credits": 3}}"#,
        )
        .unwrap();
        assert_eq!(profile.credits.available, 12345);
        assert_eq!(profile.credits.total_storage, 100);
    }
}
