//! Submitting the sheet dialog.
//!
//! A submit is three steps so a UI can hold its dialog state in a reactive
//! container without keeping it borrowed across the request:
//!
//! 1. [`SheetDialog::begin_submit`] validates and yields at most one request.
//! 2. [`send_sheet_request`] performs it.
//! 3. [`settle_submit`] closes the dialog on success or records the error.
//!
//! [`submit_dialog`] runs all three against a plain `&mut SheetDialog`.

use domain::{Sheet, SheetDialog, SheetRequest};
use tracing::{info, warn};

use crate::backend::Backend;
use crate::error::ApiError;

/// Caller-owned record of the sheet the user is working on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetSelection {
    pub current_sheet_id: Option<String>,
    pub current_sheet: Option<Sheet>,
}

impl SheetSelection {
    pub fn select(&mut self, sheet: Sheet) {
        self.current_sheet_id = Some(sheet.uuid.clone());
        self.current_sheet = Some(sheet);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub async fn send_sheet_request<B: Backend>(
    backend: &B,
    request: SheetRequest,
) -> Result<Sheet, ApiError> {
    match request {
        SheetRequest::Create(body) => backend.create_sheet(&body).await,
        SheetRequest::Update { uuid, body } => backend.update_sheet(&uuid, &body).await,
    }
}

/// Apply the outcome of a request to the dialog that issued it.
pub fn settle_submit(
    dialog: &mut SheetDialog,
    result: Result<Sheet, ApiError>,
) -> Result<Sheet, ApiError> {
    match result {
        Ok(sheet) => {
            info!(uuid = %sheet.uuid, name = %sheet.name, "sheet saved");
            dialog.finish_success();
            Ok(sheet)
        }
        Err(e) => {
            warn!(error = %e, retryable = e.is_retryable(), "saving sheet failed");
            dialog.finish_failure(e.to_string());
            Err(e)
        }
    }
}

/// Run one submit. `Ok(None)` means nothing was sent.
pub async fn submit_dialog<B: Backend>(
    backend: &B,
    dialog: &mut SheetDialog,
) -> Result<Option<Sheet>, ApiError> {
    let Some(request) = dialog.begin_submit()? else {
        return Ok(None);
    };
    let result = send_sheet_request(backend, request).await;
    settle_submit(dialog, result).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBackend, RecordedCall};
    use domain::{sheet_path, CreateSheetRequest, DomainError, SheetData, UpdateSheetRequest};

    #[tokio::test]
    async fn test_create_posts_once_and_closes() {
        let backend = MemoryBackend::new().with_next_uuid("abc-123");
        let mut selection = SheetSelection::default();
        let mut dialog = SheetDialog::open_create();
        {
            let draft = dialog.draft_mut().unwrap();
            draft.name = "My Sheet".into();
            draft.description = "desc".into();
        }

        let sheet = submit_dialog(&backend, &mut dialog).await.unwrap().unwrap();
        selection.select(sheet.clone());

        assert_eq!(
            backend.calls(),
            vec![RecordedCall::CreateSheet(CreateSheetRequest {
                name: "My Sheet".into(),
                data: SheetData {
                    description: "desc".into()
                },
            })]
        );
        assert_eq!(dialog, SheetDialog::Closed);
        assert_eq!(selection.current_sheet_id.as_deref(), Some("abc-123"));
        assert_eq!(selection.current_sheet, Some(sheet));
        assert!(sheet_path(selection.current_sheet_id.as_deref().unwrap()).contains("abc-123"));
    }

    #[tokio::test]
    async fn test_cancel_sends_nothing() {
        let backend = MemoryBackend::new();
        let mut selection = SheetSelection::default();
        selection.select(
            serde_json::from_value(serde_json::json!({"uuid": "prev", "name": "Prev"})).unwrap(),
        );
        let before = selection.clone();

        let mut dialog = SheetDialog::open_create();
        dialog.draft_mut().unwrap().name = "Discarded".into();
        dialog.cancel();

        assert_eq!(submit_dialog(&backend, &mut dialog).await.unwrap(), None);
        assert!(backend.calls().is_empty());
        assert_eq!(selection, before);
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let backend = MemoryBackend::new();
        let mut dialog = SheetDialog::open_create();
        dialog.draft_mut().unwrap().name = String::new();

        let err = submit_dialog(&backend, &mut dialog).await.unwrap_err();
        assert_eq!(err, ApiError::Validation(DomainError::EmptyName));
        assert!(backend.calls().is_empty());
        assert!(dialog.is_open());
    }

    #[tokio::test]
    async fn test_failure_keeps_dialog_open_for_retry() {
        let backend = MemoryBackend::new().with_next_uuid("abc-123");
        backend.fail_next(ApiError::Network("connection reset".into()));
        let mut dialog = SheetDialog::open_create();

        let err = submit_dialog(&backend, &mut dialog).await.unwrap_err();
        assert!(err.is_retryable());
        let SheetDialog::Open(open) = &dialog else {
            panic!("dialog should stay open");
        };
        assert!(!open.submitting);
        assert_eq!(open.error.as_deref(), Some("Network error: connection reset"));
        assert_eq!(open.draft.name, "Untitled");

        let sheet = submit_dialog(&backend, &mut dialog).await.unwrap().unwrap();
        assert_eq!(sheet.uuid, "abc-123");
        assert_eq!(backend.calls().len(), 2);
        assert!(!dialog.is_open());
    }

    #[tokio::test]
    async fn test_edit_patches_existing_sheet() {
        let backend = MemoryBackend::new().with_next_uuid("s1");
        let mut create = SheetDialog::open_create();
        let original = submit_dialog(&backend, &mut create).await.unwrap().unwrap();

        let mut dialog = SheetDialog::open_edit(&original);
        dialog.draft_mut().unwrap().description = "now with notes".into();
        let updated = submit_dialog(&backend, &mut dialog).await.unwrap().unwrap();

        assert_eq!(updated.uuid, "s1");
        assert_eq!(updated.description, "now with notes");
        assert_eq!(
            backend.calls().last(),
            Some(&RecordedCall::UpdateSheet {
                uuid: "s1".into(),
                body: UpdateSheetRequest {
                    name: "Untitled".into(),
                    description: "now with notes".into(),
                },
            })
        );
    }
}
