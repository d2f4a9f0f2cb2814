//! `reqwest` implementation of [`Backend`].
//!
//! Request construction is separated from execution (`*_request` methods) so
//! the exact method, URL and body can be checked without a server.

use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use domain::{CreateSheetRequest, Organization, Profile, ProfileFlags, Sheet, UpdateSheetRequest};

use crate::backend::Backend;
use crate::error::ApiError;

const PROFILE_PATH: &str = "api/profiles/me";
const PROFILE_FLAGS_PATH: &str = "api/profiles/me/flags";
const ORGANIZATION_PATH: &str = "api/org";
const SHEETS_PATH: &str = "api/sheets";

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Endpoint paths are resolved relative to `base_url`, which is normalised
    /// to end in `/` so a path prefix like `https://host/console` is kept.
    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn sheet_url(&self, uuid: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(SHEETS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .push(uuid);
        Ok(url)
    }

    pub fn get_request(&self, path: &str) -> Result<Request, ApiError> {
        Ok(self.client.get(self.endpoint(path)?).build()?)
    }

    pub fn sheet_request(&self, method: Method, uuid: &str) -> Result<Request, ApiError> {
        Ok(self.client.request(method, self.sheet_url(uuid)?).build()?)
    }

    pub fn create_sheet_request(&self, body: &CreateSheetRequest) -> Result<Request, ApiError> {
        Ok(self.client.post(self.endpoint(SHEETS_PATH)?).json(body).build()?)
    }

    pub fn update_sheet_request(
        &self,
        uuid: &str,
        body: &UpdateSheetRequest,
    ) -> Result<Request, ApiError> {
        Ok(self.client.patch(self.sheet_url(uuid)?).json(body).build()?)
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "api request");

        let response = self.client.execute(request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "api request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(%method, %url, status = status.as_u16(), "api request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for HttpBackend {
    async fn profile(&self) -> Result<Profile, ApiError> {
        self.fetch(self.get_request(PROFILE_PATH)?).await
    }

    async fn profile_flags(&self) -> Result<ProfileFlags, ApiError> {
        self.fetch(self.get_request(PROFILE_FLAGS_PATH)?).await
    }

    async fn organization(&self) -> Result<Organization, ApiError> {
        self.fetch(self.get_request(ORGANIZATION_PATH)?).await
    }

    async fn list_sheets(&self) -> Result<Vec<Sheet>, ApiError> {
        self.fetch(self.get_request(SHEETS_PATH)?).await
    }

    async fn get_sheet(&self, uuid: &str) -> Result<Sheet, ApiError> {
        self.fetch(self.sheet_request(Method::GET, uuid)?).await
    }

    async fn create_sheet(&self, body: &CreateSheetRequest) -> Result<Sheet, ApiError> {
        self.fetch(self.create_sheet_request(body)?).await
    }

    async fn update_sheet(&self, uuid: &str, body: &UpdateSheetRequest) -> Result<Sheet, ApiError> {
        self.fetch(self.update_sheet_request(uuid, body)?).await
    }

    async fn delete_sheet(&self, uuid: &str) -> Result<(), ApiError> {
        self.send(self.sheet_request(Method::DELETE, uuid)?).await?;
        Ok(())
    }
}
