pub mod config;
pub mod error;
pub mod profile;
pub mod sheet;
pub mod subscription;

pub use config::{ApiConfig, AppConfig, BillingConfig};
pub use error::DomainError;
pub use profile::{Credits, Organization, Profile, ProfileFlags, Tier};
pub use sheet::{
    sheet_path, CreateSheetRequest, DialogMode, OpenDialog, Sheet, SheetData, SheetDialog, SheetDraft,
    SheetRequest, UpdateSheetRequest,
};
pub use subscription::{
    format_storage, manage_subscription_url, remaining_credits, usage_percentage,
    SubscriptionMessage, SubscriptionSummary,
};
