//! # Subscription panel projection
//!
//! Turns the read-only account state ([`Profile`], [`ProfileFlags`],
//! [`Organization`]) into the values the billing panel displays. Nothing here
//! talks to the network; the manage link is a plain external redirect.

use url::Url;

use crate::error::DomainError;
use crate::profile::{Organization, Profile, ProfileFlags, Tier};

const STORAGE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Query parameter the payment portal reads to pre-fill its login form.
pub const PREFILLED_EMAIL_PARAM: &str = "prefilled_email";

/// Percentage of storage in use, rounded to two decimals.
///
/// Returns `None` when `total` is zero; callers render a placeholder instead
/// of a computed value.
pub fn usage_percentage(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(((used as f64 / total as f64) * 10000.0).round() / 100.0)
}

/// Credits are stored in thousandths.
pub fn remaining_credits(available: i64) -> f64 {
    available as f64 / 1000.0
}

/// Human-readable size in binary multiples, e.g. `1.5 GB`.
pub fn format_storage(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < STORAGE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", STORAGE_UNITS[unit])
}

/// `{base}?prefilled_email={email}`, keeping any query the base already has.
pub fn manage_subscription_url(base: &Url, email: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair(PREFILLED_EMAIL_PARAM, email);
    url
}

/// Which explanatory block the panel shows. Exactly one is ever rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubscriptionMessage {
    Individual { tier: Tier },
    Organization { name: String },
}

/// Everything the billing panel renders, computed in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct SubscriptionSummary {
    pub usage_percentage: Option<f64>,
    pub total_storage: String,
    pub remaining_credits: f64,
    pub message: SubscriptionMessage,
    /// Present only for individual subscribers with a configured portal.
    pub manage_url: Option<Url>,
}

impl SubscriptionSummary {
    pub fn build(
        profile: Option<&Profile>,
        flags: Option<&ProfileFlags>,
        organization: Option<&Organization>,
        email: &str,
        manage_base: Option<&Url>,
    ) -> Result<Self, DomainError> {
        let profile = profile.ok_or(DomainError::DataUnavailable)?;
        // Without flags, membership is unknown and the portal must not be offered.
        let flags = flags.ok_or(DomainError::DataUnavailable)?;
        let credits = &profile.credits;

        let message = if flags.is_organization_member {
            SubscriptionMessage::Organization {
                name: organization.map(|o| o.name.clone()).unwrap_or_default(),
            }
        } else {
            SubscriptionMessage::Individual {
                tier: Tier::from_flags(flags),
            }
        };

        let manage_url = match message {
            SubscriptionMessage::Individual { .. } => {
                manage_base.map(|base| manage_subscription_url(base, email))
            }
            SubscriptionMessage::Organization { .. } => None,
        };

        Ok(Self {
            usage_percentage: usage_percentage(credits.used_storage, credits.total_storage),
            total_storage: format_storage(credits.total_storage),
            remaining_credits: remaining_credits(credits.available),
            message,
            manage_url,
        })
    }

    /// `"42.5%"`, or an em dash when the plan has no storage total.
    pub fn usage_label(&self) -> String {
        match self.usage_percentage {
            Some(pct) => format!("{pct}%"),
            None => "\u{2014}".to_string(),
        }
    }

    pub fn credits_label(&self) -> String {
        format!("{}", self.remaining_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(available: i64, used: u64, total: u64) -> Profile {
        Profile {
            name: Some("Ada".into()),
            user_email: "ada@example.com".into(),
            credits: crate::Credits {
                available,
                used_storage: used,
                total_storage: total,
            },
        }
    }

    fn portal() -> Url {
        Url::parse("https://billing.example.com/p/login/test").unwrap()
    }

    #[test]
    fn test_usage_percentage_bounds() {
        for total in [1u64, 3, 7, 1000, 1 << 30] {
            for used in [0, total / 3, total / 2, total.saturating_sub(1), total] {
                let pct = usage_percentage(used, total).unwrap();
                assert!((0.0..=100.0).contains(&pct), "{used}/{total} -> {pct}");
                let expected = ((used as f64 / total as f64) * 10000.0).round() / 100.0;
                assert_eq!(pct, expected);
            }
        }
        assert_eq!(usage_percentage(1, 3), Some(33.33));
        assert_eq!(usage_percentage(2, 3), Some(66.67));
    }

    #[test]
    fn test_usage_percentage_zero_total() {
        assert_eq!(usage_percentage(0, 0), None);
        assert_eq!(usage_percentage(10, 0), None);
    }

    #[test]
    fn test_remaining_credits() {
        assert_eq!(remaining_credits(12345), 12.345);
        assert_eq!(remaining_credits(0), 0.0);
        assert_eq!(remaining_credits(-500), -0.5);
    }

    #[test]
    fn test_format_storage() {
        assert_eq!(format_storage(0), "0 B");
        assert_eq!(format_storage(512), "512 B");
        assert_eq!(format_storage(1024), "1 KB");
        assert_eq!(format_storage(1536), "1.5 KB");
        assert_eq!(format_storage(1 << 30), "1 GB");
        assert_eq!(format_storage(5 * (1 << 30) + (1 << 29)), "5.5 GB");
    }

    #[test]
    fn test_manage_url_encodes_email() {
        let url = manage_subscription_url(&portal(), "a+b@example.com");
        assert_eq!(
            url.as_str(),
            "https://billing.example.com/p/login/test?prefilled_email=a%2Bb%40example.com"
        );

        let base = Url::parse("https://billing.example.com/portal?locale=en").unwrap();
        let url = manage_subscription_url(&base, "x@y.z");
        assert_eq!(url.query(), Some("locale=en&prefilled_email=x%40y.z"));
    }

    #[test]
    fn test_summary_for_individual_pro() {
        let flags = ProfileFlags {
            is_organization_member: false,
            is_pro_subscriber: true,
            is_basic_subscriber: true,
        };
        let base = portal();
        let summary = SubscriptionSummary::build(
            Some(&profile(12345, 1 << 29, 1 << 30)),
            Some(&flags),
            None,
            "ada@example.com",
            Some(&base),
        )
        .unwrap();

        assert_eq!(summary.message, SubscriptionMessage::Individual { tier: Tier::Pro });
        assert_eq!(summary.usage_label(), "50%");
        assert_eq!(summary.total_storage, "1 GB");
        assert_eq!(summary.credits_label(), "12.345");
        let manage = summary.manage_url.unwrap();
        assert_eq!(manage.query(), Some("prefilled_email=ada%40example.com"));
    }

    #[test]
    fn test_summary_for_organization_member() {
        let flags = ProfileFlags {
            is_organization_member: true,
            is_pro_subscriber: true,
            is_basic_subscriber: false,
        };
        let org = Organization {
            name: "Acme".into(),
        };
        let base = portal();
        let summary = SubscriptionSummary::build(
            Some(&profile(0, 0, 100)),
            Some(&flags),
            Some(&org),
            "ada@example.com",
            Some(&base),
        )
        .unwrap();

        assert_eq!(
            summary.message,
            SubscriptionMessage::Organization {
                name: "Acme".into()
            }
        );
        assert!(summary.manage_url.is_none());
    }

    #[test]
    fn test_summary_without_portal_hides_manage() {
        let summary = SubscriptionSummary::build(
            Some(&profile(0, 0, 100)),
            Some(&ProfileFlags::default()),
            None,
            "ada@example.com",
            None,
        )
        .unwrap();
        assert_eq!(summary.message, SubscriptionMessage::Individual { tier: Tier::Free });
        assert!(summary.manage_url.is_none());
    }

    #[test]
    fn test_summary_guards_missing_data() {
        let err =
            SubscriptionSummary::build(None, Some(&ProfileFlags::default()), None, "", None)
                .unwrap_err();
        assert_eq!(err, DomainError::DataUnavailable);

        let summary = SubscriptionSummary::build(
            Some(&profile(1000, 5, 0)),
            Some(&ProfileFlags::default()),
            None,
            "",
            None,
        )
        .unwrap();
        assert_eq!(summary.usage_label(), "\u{2014}");
        assert_eq!(summary.credits_label(), "1");
    }

    #[test]
    fn test_summary_without_flags_is_unavailable() {
        let org = Organization {
            name: "Acme".into(),
        };
        let base = portal();
        let err = SubscriptionSummary::build(
            Some(&profile(2500, 1, 4)),
            None,
            Some(&org),
            "ada@example.com",
            Some(&base),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::DataUnavailable);
    }
}
