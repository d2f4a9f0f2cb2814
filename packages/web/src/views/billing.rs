use dioxus::prelude::*;
use ui::views::BillingView;

#[component]
pub fn Billing() -> Element {
    rsx! {
        BillingView {}
    }
}
