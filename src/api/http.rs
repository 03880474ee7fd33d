//! Reqwest-backed implementation of the backend contract.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    AccessToken, ArchiveReader, ArchiveWriter, CloseYearRequest, DashboardReader, FileUpload,
    ReportReader, SettingsReader, StartNewYearRequest,
};
use crate::domain::archive::{ArchiveFile, YearArchive};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::report::EventWiseReport;
use crate::domain::settings::ClubSettings;
use crate::domain::types::RotaractYear;
use crate::models::config::ClientConfig;

/// JSON envelope wrapping every non-binary backend response.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> ApiResult<T> {
        self.data
            .ok_or_else(|| ApiError::Decode("response envelope carried no data".to_string()))
    }

    /// Missing or `null` data is a valid empty payload for container-typed
    /// responses, mirroring how the backend answers an empty archive list.
    fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// REST client bound to a base URL and an optional bearer credential.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    api_base_url: String,
    file_base_url: String,
    token: Option<AccessToken>,
}

impl HttpBackend {
    /// Builds a backend for the given API base URL, e.g.
    /// `http://localhost:5000/api`. Archived file URLs are site-relative, so
    /// they resolve against the base URL with its `/api` suffix stripped.
    #[must_use]
    pub fn new(api_base_url: &str, token: Option<AccessToken>) -> Self {
        let api_base_url = api_base_url.trim_end_matches('/').to_string();
        let file_base_url = api_base_url
            .strip_suffix("/api")
            .unwrap_or(&api_base_url)
            .to_string();
        Self {
            http: reqwest::Client::new(),
            api_base_url,
            file_base_url,
            token,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let token = config.access_token.as_deref().map(AccessToken::new);
        Self::new(&config.api_base_url, token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            _ => {
                let message = response
                    .json::<Envelope<serde_json::Value>>()
                    .await
                    .ok()
                    .and_then(|envelope| envelope.message);
                match message {
                    Some(message) => ApiError::Backend(message),
                    None => ApiError::Backend(format!("Request failed with status {status}")),
                }
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let envelope = response.json::<Envelope<T>>().await?;
        envelope.into_data()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::decode(response).await
    }

    async fn get_json_or_default<T: DeserializeOwned + Default>(&self, path: &str) -> ApiResult<T> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let envelope = response.json::<Envelope<T>>().await?;
        Ok(envelope.into_data_or_default())
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn fetch_bytes(&self, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = self.authorize(request).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ArchiveReader for HttpBackend {
    async fn list_archives(&self) -> ApiResult<Vec<YearArchive>> {
        self.get_json_or_default("/archive").await
    }

    async fn get_archive_by_year(&self, year: &RotaractYear) -> ApiResult<YearArchive> {
        self.get_json(&format!("/archive/{year}")).await
    }

    async fn download_file(&self, url: &str) -> ApiResult<Vec<u8>> {
        let absolute = if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.file_base_url, url)
        };
        self.fetch_bytes(self.http.get(absolute)).await
    }
}

#[async_trait]
impl ArchiveWriter for HttpBackend {
    async fn close_year(&self, request: &CloseYearRequest) -> ApiResult<()> {
        self.post_json("/archive/close-year", request).await
    }

    async fn start_new_year(&self, request: &StartNewYearRequest) -> ApiResult<()> {
        self.post_json("/archive/start-new-year", request).await
    }

    async fn add_archive_file(
        &self,
        year: &RotaractYear,
        upload: FileUpload,
    ) -> ApiResult<Vec<ArchiveFile>> {
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.name.clone()),
            )
            .text("name", upload.name)
            .text("type", upload.file_type.as_str());
        let response = self
            .authorize(
                self.http
                    .post(self.url(&format!("/archive/{year}/files")))
                    .multipart(form),
            )
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl SettingsReader for HttpBackend {
    async fn get_settings(&self) -> ApiResult<ClubSettings> {
        self.get_json("/settings").await
    }
}

#[async_trait]
impl DashboardReader for HttpBackend {
    async fn get_admin_dashboard(&self) -> ApiResult<DashboardSnapshot> {
        self.get_json("/admin/dashboard").await
    }
}

#[async_trait]
impl ReportReader for HttpBackend {
    async fn get_event_wise_report(&self) -> ApiResult<EventWiseReport> {
        self.get_json("/reports/event-wise").await
    }

    async fn export_financial_report(&self, year: &RotaractYear) -> ApiResult<Vec<u8>> {
        self.fetch_bytes(
            self.http
                .get(self.url("/reports/export/pdf"))
                .query(&[("rotaractYear", year.as_str())]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_base_url_strips_api_suffix() {
        let backend = HttpBackend::new("http://localhost:5000/api/", None);
        assert_eq!(backend.api_base_url, "http://localhost:5000/api");
        assert_eq!(backend.file_base_url, "http://localhost:5000");
    }

    #[test]
    fn file_base_url_without_api_suffix_is_unchanged() {
        let backend = HttpBackend::new("http://example.org", None);
        assert_eq!(backend.file_base_url, "http://example.org");
    }

    // Deliberately generic over `DeserializeOwned` alone, like `decode`.
    fn decode_envelope<T: DeserializeOwned>(value: serde_json::Value) -> Envelope<T> {
        serde_json::from_value(value).expect("valid envelope")
    }

    #[test]
    fn envelope_decodes_payloads_without_default_impls() {
        let envelope: Envelope<Vec<YearArchive>> = decode_envelope(serde_json::json!({
            "data": [{
                "rotaractYear": "2024-2025",
                "status": "active"
            }],
            "message": "ok"
        }));

        let archives = envelope.into_data().expect("data present");
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].rotaract_year, "2024-2025");
    }

    #[test]
    fn empty_archive_list_envelope_is_no_archives() {
        let envelope: Envelope<Vec<YearArchive>> =
            decode_envelope(serde_json::json!({ "message": "ok" }));
        assert!(envelope.into_data_or_default().is_empty());

        let envelope: Envelope<Vec<YearArchive>> =
            decode_envelope(serde_json::json!({ "data": null }));
        assert!(envelope.into_data_or_default().is_empty());
    }

    #[test]
    fn missing_data_is_a_decode_error_for_required_payloads() {
        let envelope: Envelope<YearArchive> = decode_envelope(serde_json::json!({ "data": null }));
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }
}
