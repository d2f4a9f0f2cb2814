//! Subscription and billing status panel.

use dioxus::prelude::*;
use domain::{DomainError, SubscriptionMessage, SubscriptionSummary};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaArrowUpRightFromSquare;
use crate::{open_external, use_account, use_billing_portal, Icon};

/// Storage usage, remaining credits and plan for the signed-in user.
///
/// - **Individual subscriber**: current tier plus a "Manage Subscription"
///   action that opens the hosted portal with the email pre-filled.
/// - **Organization member**: the organization's name; billing is managed by
///   the organization so no action is offered.
#[component]
pub fn SubscriptionPanel(email: String) -> Element {
    let account = use_account();
    let portal = use_billing_portal();
    let state = account();

    if state.loading {
        return rsx! {
            section {
                class: "subscription-panel",
                p { class: "view-muted", "Loading subscription..." }
            }
        };
    }

    let summary = match SubscriptionSummary::build(
        state.profile.as_ref(),
        state.flags.as_ref(),
        state.organization.as_ref(),
        &email,
        portal.url(),
    ) {
        Ok(summary) => summary,
        Err(DomainError::DataUnavailable) => {
            let reason = state
                .error
                .unwrap_or_else(|| "Profile is not available yet.".to_string());
            return rsx! {
                section {
                    class: "subscription-panel",
                    p { class: "view-muted", "Subscription details unavailable. {reason}" }
                }
            };
        }
        Err(e) => {
            return rsx! {
                section {
                    class: "subscription-panel",
                    p { class: "form-error", "{e}" }
                }
            };
        }
    };

    let usage = summary.usage_label();
    let total = summary.total_storage.clone();
    let credits = summary.credits_label();

    let message = match &summary.message {
        SubscriptionMessage::Individual { tier } => rsx! {
            div {
                class: "subscription-message",
                p {
                    "You are currently on the "
                    strong { "{tier}" }
                    " plan."
                }
                p {
                    class: "view-muted",
                    "Upgrade or change your plan, update payment details and download invoices from the subscription portal."
                }
            }
        },
        SubscriptionMessage::Organization { name } => rsx! {
            div {
                class: "subscription-message",
                p {
                    "Your subscription is managed by "
                    strong { "{name}" }
                    "."
                }
                p {
                    class: "view-muted",
                    "Contact your organization administrator to change plans or add credits."
                }
            }
        },
    };

    rsx! {
        section {
            class: "subscription-panel",
            h2 { class: "view-section-title", "Subscription" }

            dl {
                class: "subscription-stats",
                div {
                    dt { "Storage used" }
                    dd { "{usage} of {total}" }
                }
                div {
                    dt { "Remaining credits" }
                    dd { "{credits}" }
                }
            }

            {message}

            if let Some(url) = summary.manage_url.clone() {
                div {
                    class: "flex gap-2 mt-5",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| open_external(url.as_str()),
                        Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                        "Manage Subscription"
                    }
                }
            }
        }
    }
}
