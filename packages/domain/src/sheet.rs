//! # Sheets and the create/edit dialog
//!
//! A [`Sheet`] is owned by the server and referenced client-side by its
//! `uuid`. Until the create call returns, the UI only holds a [`SheetDraft`].
//!
//! The dialog is modelled by [`SheetDialog`]: `Closed`, or `Open` with a
//! draft. While open it tracks whether a request is in flight so a second
//! confirm is ignored, and keeps the last failure message for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const DEFAULT_SHEET_NAME: &str = "Untitled";

/// A sheet as returned by `GET/POST/PATCH /api/sheets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub extra_data: serde_json::Value,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client-side form state for a sheet that may not exist yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetDraft {
    pub name: String,
    pub description: String,
}

impl Default for SheetDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHEET_NAME.to_string(),
            description: String::new(),
        }
    }
}

impl SheetDraft {
    pub fn from_sheet(sheet: &Sheet) -> Self {
        Self {
            name: sheet.name.clone(),
            description: sheet.description.clone(),
        }
    }

    /// The trimmed name, or [`DomainError::EmptyName`].
    pub fn validate(&self) -> Result<String, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(name.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetData {
    pub description: String,
}

/// Body of `POST /api/sheets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSheetRequest {
    pub name: String,
    pub data: SheetData,
}

/// Body of `PATCH /api/sheets/{uuid}`. The endpoint reads both fields at the
/// top level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSheetRequest {
    pub name: String,
    pub description: String,
}

/// The single request a dialog submit produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetRequest {
    Create(CreateSheetRequest),
    Update {
        uuid: String,
        body: UpdateSheetRequest,
    },
}

/// Client route of a sheet's detail view.
pub fn sheet_path(uuid: &str) -> String {
    format!("/sheets/{uuid}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { uuid: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenDialog {
    pub mode: DialogMode,
    pub draft: SheetDraft,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SheetDialog {
    #[default]
    Closed,
    Open(OpenDialog),
}

impl SheetDialog {
    pub fn open_create() -> Self {
        SheetDialog::Open(OpenDialog {
            mode: DialogMode::Create,
            draft: SheetDraft::default(),
            submitting: false,
            error: None,
        })
    }

    pub fn open_edit(sheet: &Sheet) -> Self {
        SheetDialog::Open(OpenDialog {
            mode: DialogMode::Edit {
                uuid: sheet.uuid.clone(),
            },
            draft: SheetDraft::from_sheet(sheet),
            submitting: false,
            error: None,
        })
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SheetDialog::Open(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SheetDialog::Open(open) if open.submitting)
    }

    pub fn draft_mut(&mut self) -> Option<&mut SheetDraft> {
        match self {
            SheetDialog::Open(open) => Some(&mut open.draft),
            SheetDialog::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = SheetDialog::Closed;
    }

    /// Validate the draft and mark the dialog as submitting.
    ///
    /// Returns `Ok(None)` when there is nothing to send: the dialog is closed
    /// or a previous submit has not finished yet.
    pub fn begin_submit(&mut self) -> Result<Option<SheetRequest>, DomainError> {
        let SheetDialog::Open(open) = self else {
            return Ok(None);
        };
        if open.submitting {
            return Ok(None);
        }

        let name = match open.draft.validate() {
            Ok(name) => name,
            Err(e) => {
                open.error = Some(e.to_string());
                return Err(e);
            }
        };
        let description = open.draft.description.clone();

        open.submitting = true;
        open.error = None;

        let request = match &open.mode {
            DialogMode::Create => SheetRequest::Create(CreateSheetRequest {
                name,
                data: SheetData { description },
            }),
            DialogMode::Edit { uuid } => SheetRequest::Update {
                uuid: uuid.clone(),
                body: UpdateSheetRequest { name, description },
            },
        };
        Ok(Some(request))
    }

    pub fn finish_success(&mut self) {
        *self = SheetDialog::Closed;
    }

    /// Keep the draft so the user can retry.
    pub fn finish_failure(&mut self, message: impl Into<String>) {
        if let SheetDialog::Open(open) = self {
            open.submitting = false;
            open.error = Some(message.into());
        }
    }
}
