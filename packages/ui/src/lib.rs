//! This crate contains all shared UI for the console.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{
    load_config, make_backend, open_external, use_backend, use_billing_portal, BillingPortal,
};

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod navbar;
pub use navbar::Navbar;

mod account;
pub use account::{load_account, use_account, AccountProvider, AccountState};

pub mod notices;
pub use notices::{push_notice, use_notices, NoticeLevel, NoticeList, Notices};

mod markdown;
pub use markdown::render_markdown;

mod subscription_panel;
pub use subscription_panel::SubscriptionPanel;

mod sheet_dialog;
pub use sheet_dialog::SheetDialog;
