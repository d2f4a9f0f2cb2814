use dioxus::prelude::*;

use crate::{use_account, SubscriptionPanel, VIEWS_CSS};

/// Account billing page: the subscription panel for the signed-in user.
#[component]
pub fn BillingView() -> Element {
    let account = use_account();
    let email = account().email();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Billing" }
            SubscriptionPanel { email }
        }
    }
}
