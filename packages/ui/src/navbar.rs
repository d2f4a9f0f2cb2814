use dioxus::prelude::*;
use domain::Tier;

use crate::{use_account, VIEWS_CSS};

/// Top bar: brand, the platform's navigation links, and the signed-in
/// account with its plan.
#[component]
pub fn Navbar(children: Element) -> Element {
    let account = use_account();
    let state = account();
    let email = state.email();
    let plan = match state.flags {
        Some(flags) if flags.is_organization_member => "Organization".to_string(),
        Some(flags) => Tier::from_flags(&flags).to_string(),
        None => String::new(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Promptly" }
            div { class: "navbar-links", {children} }
            if !email.is_empty() {
                span {
                    class: "navbar-account",
                    "{email}"
                    if !plan.is_empty() {
                        span { class: "navbar-plan", "{plan}" }
                    }
                }
            }
        }
    }
}
