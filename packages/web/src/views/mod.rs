mod sheets;
pub use sheets::Sheets;

mod sheet_detail;
pub use sheet_detail::SheetDetail;

mod billing;
pub use billing::Billing;
