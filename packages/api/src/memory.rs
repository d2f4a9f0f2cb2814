use std::sync::{Arc, Mutex};

use chrono::Utc;
use domain::{CreateSheetRequest, Organization, Profile, ProfileFlags, Sheet, UpdateSheetRequest};

use crate::backend::Backend;
use crate::error::ApiError;

/// One call made against a [`MemoryBackend`], in order.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    Profile,
    ProfileFlags,
    Organization,
    ListSheets,
    GetSheet(String),
    CreateSheet(CreateSheetRequest),
    UpdateSheet {
        uuid: String,
        body: UpdateSheetRequest,
    },
    DeleteSheet(String),
}

#[derive(Debug, Default)]
struct MemoryState {
    profile: Option<Profile>,
    flags: ProfileFlags,
    organization: Option<Organization>,
    sheets: Vec<Sheet>,
    calls: Vec<RecordedCall>,
    next_uuids: Vec<String>,
    fail_next: Option<ApiError>,
}

/// In-memory Backend for testing and offline previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.state.lock().unwrap().profile = Some(profile);
        self
    }

    pub fn with_flags(self, flags: ProfileFlags) -> Self {
        self.state.lock().unwrap().flags = flags;
        self
    }

    pub fn with_organization(self, organization: Organization) -> Self {
        self.state.lock().unwrap().organization = Some(organization);
        self
    }

    pub fn with_sheet(self, sheet: Sheet) -> Self {
        self.state.lock().unwrap().sheets.push(sheet);
        self
    }

    /// Use `uuid` for the next created sheet instead of a random v4 id.
    pub fn with_next_uuid(self, uuid: impl Into<String>) -> Self {
        self.state.lock().unwrap().next_uuids.push(uuid.into());
        self
    }

    /// Make the next call return `error`. The call is still recorded.
    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().fail_next = Some(error);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn sheets(&self) -> Vec<Sheet> {
        self.state.lock().unwrap().sheets.clone()
    }

    fn record(&self, call: RecordedCall) -> Result<std::sync::MutexGuard<'_, MemoryState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

impl Backend for MemoryBackend {
    async fn profile(&self) -> Result<Profile, ApiError> {
        let state = self.record(RecordedCall::Profile)?;
        state
            .profile
            .clone()
            .ok_or_else(|| ApiError::NotFound("Profile".into()))
    }

    async fn profile_flags(&self) -> Result<ProfileFlags, ApiError> {
        let state = self.record(RecordedCall::ProfileFlags)?;
        Ok(state.flags)
    }

    async fn organization(&self) -> Result<Organization, ApiError> {
        let state = self.record(RecordedCall::Organization)?;
        state
            .organization
            .clone()
            .ok_or_else(|| ApiError::NotFound("Organization".into()))
    }

    async fn list_sheets(&self) -> Result<Vec<Sheet>, ApiError> {
        let state = self.record(RecordedCall::ListSheets)?;
        let mut sheets = state.sheets.clone();
        sheets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sheets)
    }

    async fn get_sheet(&self, uuid: &str) -> Result<Sheet, ApiError> {
        let state = self.record(RecordedCall::GetSheet(uuid.to_string()))?;
        state
            .sheets
            .iter()
            .find(|s| s.uuid == uuid)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Sheet {uuid}")))
    }

    async fn create_sheet(&self, body: &CreateSheetRequest) -> Result<Sheet, ApiError> {
        let mut state = self.record(RecordedCall::CreateSheet(body.clone()))?;
        let uuid = if state.next_uuids.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            state.next_uuids.remove(0)
        };
        let now = Utc::now();
        let sheet = Sheet {
            uuid,
            name: body.name.clone(),
            description: body.data.description.clone(),
            extra_data: serde_json::json!({"has_header": true}),
            total_rows: 0,
            created_at: Some(now),
            updated_at: Some(now),
        };
        state.sheets.push(sheet.clone());
        Ok(sheet)
    }

    async fn update_sheet(&self, uuid: &str, body: &UpdateSheetRequest) -> Result<Sheet, ApiError> {
        let mut state = self.record(RecordedCall::UpdateSheet {
            uuid: uuid.to_string(),
            body: body.clone(),
        })?;
        let sheet = state
            .sheets
            .iter_mut()
            .find(|s| s.uuid == uuid)
            .ok_or_else(|| ApiError::NotFound(format!("Sheet {uuid}")))?;
        sheet.name = body.name.clone();
        sheet.description = body.description.clone();
        sheet.updated_at = Some(Utc::now());
        Ok(sheet.clone())
    }

    async fn delete_sheet(&self, uuid: &str) -> Result<(), ApiError> {
        let mut state = self.record(RecordedCall::DeleteSheet(uuid.to_string()))?;
        let before = state.sheets.len();
        state.sheets.retain(|s| s.uuid != uuid);
        if state.sheets.len() == before {
            return Err(ApiError::NotFound(format!("Sheet {uuid}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::SheetData;

    fn create(name: &str) -> CreateSheetRequest {
        CreateSheetRequest {
            name: name.into(),
            data: SheetData::default(),
        }
    }

    #[tokio::test]
    async fn test_sheet_crud() {
        let backend = MemoryBackend::new().with_next_uuid("abc-123");

        let sheet = backend.create_sheet(&create("Leads")).await.unwrap();
        assert_eq!(sheet.uuid, "abc-123");
        assert_eq!(backend.get_sheet("abc-123").await.unwrap().name, "Leads");

        let updated = backend
            .update_sheet(
                "abc-123",
                &UpdateSheetRequest {
                    name: "Leads v2".into(),
                    description: "enriched".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description, "enriched");
        assert_eq!(backend.list_sheets().await.unwrap(), vec![updated]);

        backend.delete_sheet("abc-123").await.unwrap();
        assert!(backend.list_sheets().await.unwrap().is_empty());
        assert!(matches!(
            backend.delete_sheet("abc-123").await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_generated_uuids_are_unique() {
        let backend = MemoryBackend::new();
        let a = backend.create_sheet(&create("a")).await.unwrap();
        let b = backend.create_sheet(&create("b")).await.unwrap();
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(backend.sheets().len(), 2);
    }

    #[tokio::test]
    async fn test_fail_next_applies_once() {
        let backend = MemoryBackend::new().with_profile(Profile::default());
        backend.fail_next(ApiError::Network("offline".into()));

        assert_eq!(
            backend.profile().await,
            Err(ApiError::Network("offline".into()))
        );
        assert!(backend.profile().await.is_ok());
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::Profile, RecordedCall::Profile]
        );
    }

    #[tokio::test]
    async fn test_missing_organization() {
        let backend = MemoryBackend::new();
        assert!(matches!(
            backend.organization().await,
            Err(ApiError::NotFound(_))
        ));
    }
}
