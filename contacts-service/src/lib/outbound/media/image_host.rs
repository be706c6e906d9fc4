use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MediaConfig;
use crate::domain::user::errors::ImageHostError;
use crate::domain::user::ports::ImageHost;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// HTTP adapter for an external image host.
///
/// Posts the image bytes as multipart form data to the configured upload
/// endpoint and persists nothing itself; the caller stores the returned
/// public URL.
pub struct HttpImageHost {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl HttpImageHost {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: config.upload_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ImageHost for HttpImageHost {
    async fn upload(&self, data: Vec<u8>, public_id: &str) -> Result<String, ImageHostError> {
        let part = reqwest::multipart::Part::bytes(data).file_name(public_id.to_string());
        let form = reqwest::multipart::Form::new()
            .text("public_id", public_id.to_string())
            .part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageHostError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageHostError::UploadFailed(format!(
                "upload endpoint returned {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::UploadFailed(e.to_string()))?;

        Ok(body.secure_url)
    }
}
