//! # API crate: typed client for the console's REST endpoints
//!
//! Everything the UI needs from the server goes through the [`Backend`] trait,
//! so views and the sheet dialog workflow can run against the real HTTP API or
//! an in-memory stand-in.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait: account reads and sheet CRUD. |
//! | [`error`] | [`ApiError`], the client-side error taxonomy. |
//! | [`http`] | [`HttpBackend`], a `reqwest` implementation of [`Backend`]. |
//! | [`memory`] | [`MemoryBackend`], an in-memory implementation that records calls. |
//! | [`workflow`] | Sheet dialog submission and the caller-owned [`SheetSelection`]. |
//!
//! ## Endpoints
//!
//! - **Account**: `GET /api/profiles/me`, `GET /api/profiles/me/flags`, `GET /api/org`
//! - **Sheets**: `GET /api/sheets`, `POST /api/sheets`, `GET|PATCH|DELETE /api/sheets/{uuid}`

pub mod backend;
pub mod error;
pub mod http;
pub mod memory;
pub mod workflow;

pub use backend::Backend;
pub use error::ApiError;
pub use http::HttpBackend;
pub use memory::{MemoryBackend, RecordedCall};
pub use workflow::{send_sheet_request, settle_submit, submit_dialog, SheetSelection};

pub use domain::{Organization, Profile, ProfileFlags, Sheet};
