mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod billing;
pub use billing::BillingView;

mod sheets;
pub use sheets::SheetsView;

mod sheet_detail;
pub use sheet_detail::SheetDetailView;
