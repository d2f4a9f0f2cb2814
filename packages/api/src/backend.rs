//! The [`Backend`] trait: every server call the console makes.
//!
//! Implementations live in sibling modules ([`crate::http`], [`crate::memory`]).
//! Futures are not required to be `Send` so the same trait serves the
//! single-threaded WASM runtime.

use std::future::Future;

use domain::{CreateSheetRequest, Organization, Profile, ProfileFlags, Sheet, UpdateSheetRequest};

use crate::error::ApiError;

pub trait Backend {
    /// `GET /api/profiles/me`
    fn profile(&self) -> impl Future<Output = Result<Profile, ApiError>>;

    /// `GET /api/profiles/me/flags`
    fn profile_flags(&self) -> impl Future<Output = Result<ProfileFlags, ApiError>>;

    /// `GET /api/org`
    fn organization(&self) -> impl Future<Output = Result<Organization, ApiError>>;

    /// `GET /api/sheets`, most recently updated first.
    fn list_sheets(&self) -> impl Future<Output = Result<Vec<Sheet>, ApiError>>;

    /// `GET /api/sheets/{uuid}`
    fn get_sheet(&self, uuid: &str) -> impl Future<Output = Result<Sheet, ApiError>>;

    /// `POST /api/sheets`
    fn create_sheet(
        &self,
        body: &CreateSheetRequest,
    ) -> impl Future<Output = Result<Sheet, ApiError>>;

    /// `PATCH /api/sheets/{uuid}`
    fn update_sheet(
        &self,
        uuid: &str,
        body: &UpdateSheetRequest,
    ) -> impl Future<Output = Result<Sheet, ApiError>>;

    /// `DELETE /api/sheets/{uuid}`
    fn delete_sheet(&self, uuid: &str) -> impl Future<Output = Result<(), ApiError>>;
}
