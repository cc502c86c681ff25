//! HTTP access to the remote weather odds service.
//!
//! [`HttpClient`] uses `reqwest`, which runs on tokio natively and on the
//! browser `fetch` API under `wasm32`. Futures are not `Send` in the
//! browser, hence `?Send` on the trait.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::export::{ExportFile, ExportFormat};
use crate::query::{CheckRequest, ExportRequest};
use crate::response::WeatherResponse;
use async_trait::async_trait;
use reqwest::Client;

pub const CHECK_ENDPOINT: &str = "/check";

#[async_trait(?Send)]
pub trait WeatherApi {
    /// `POST /check`
    async fn check(&self, request: &CheckRequest) -> Result<WeatherResponse, ApiError>;

    /// `POST /download/{csv,json}`, returning the raw file body.
    async fn download(
        &self,
        format: ExportFormat,
        request: &ExportRequest,
    ) -> Result<Vec<u8>, ApiError>;
}

/// Download an export and name it for saving.
pub async fn fetch_export<A: WeatherApi + ?Sized>(
    api: &A,
    format: ExportFormat,
    request: &ExportRequest,
) -> Result<ExportFile, ApiError> {
    let bytes = api.download(format, request).await?;
    log::info!(
        "Downloaded {} export for {} ({} bytes)",
        format,
        request.city,
        bytes.len()
    );
    Ok(ExportFile {
        filename: format.filename(request),
        mime_type: format.mime_type(),
        bytes,
    })
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    http: Client,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.config.endpoint(path);
        let res = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let status = res.status();
        if !status.is_success() {
            log::warn!("{} answered {}", url, status);
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(res)
    }
}

#[async_trait(?Send)]
impl WeatherApi for HttpClient {
    async fn check(&self, request: &CheckRequest) -> Result<WeatherResponse, ApiError> {
        let res = self.post(CHECK_ENDPOINT, request).await?;
        let body = res.text().await.map_err(|e| ApiError::Network {
            endpoint: CHECK_ENDPOINT.to_string(),
            message: e.to_string(),
        })?;
        WeatherResponse::from_json(&body).map_err(|e| ApiError::Decode {
            endpoint: CHECK_ENDPOINT.to_string(),
            message: e.to_string(),
        })
    }

    async fn download(
        &self,
        format: ExportFormat,
        request: &ExportRequest,
    ) -> Result<Vec<u8>, ApiError> {
        let res = self.post(format.endpoint(), request).await?;
        let bytes = res.bytes().await.map_err(|e| ApiError::Network {
            endpoint: format.endpoint().to_string(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
