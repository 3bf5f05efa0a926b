//! Profile picture upload to the external image host.
//!
//! Goes straight through the transport: the backend's bearer token must
//! not leak to a third party, and a 401 from the host is not our session.

use serde::Deserialize;
use std::rc::Rc;
use thiserror::Error;

use crate::config::AppConfig;
use crate::http::{HttpMethod, HttpRequest, HttpTransport, MultipartPart, RequestBody};

/// A file picked in the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Only image files can be uploaded")]
    NotAnImage,

    #[error("Image is larger than {max_mb} MB")]
    TooLarge { max_mb: usize },

    #[error("Image upload failed ({0})")]
    Rejected(u16),

    #[error("Image upload failed: {0}")]
    Network(String),

    #[error("Image host returned an unexpected response")]
    BadResponse,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Clone)]
pub struct ImageUploader {
    config: Rc<AppConfig>,
    transport: Rc<dyn HttpTransport>,
}

impl ImageUploader {
    pub fn new(config: AppConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            config: Rc::new(config),
            transport,
        }
    }

    /// Cheap checks done before any bytes leave the browser
    pub fn check(&self, file: &ImageFile) -> Result<(), UploadError> {
        if !file.content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage);
        }
        if file.bytes.len() > self.config.max_upload_bytes {
            return Err(UploadError::TooLarge {
                max_mb: self.config.max_upload_bytes / (1024 * 1024),
            });
        }
        Ok(())
    }

    /// Upload and return the public HTTPS URL of the stored image
    pub async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        self.check(&file)?;
        log::debug!("uploading {} ({} bytes)", file.name, file.bytes.len());

        let body = RequestBody::Multipart(vec![
            MultipartPart::File {
                name: "file".to_string(),
                filename: file.name,
                content_type: file.content_type,
                bytes: file.bytes,
            },
            MultipartPart::Text {
                name: "upload_preset".to_string(),
                value: self.config.upload_preset.clone(),
            },
        ]);
        let request = HttpRequest::new(HttpMethod::Post, self.config.upload_url.clone()).body(body);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| UploadError::Network(e.0))?;
        if !response.is_success() {
            log::warn!("image host answered {}", response.status);
            return Err(UploadError::Rejected(response.status));
        }
        let parsed: UploadResponse = response.json().map_err(|_| UploadError::BadResponse)?;
        Ok(parsed.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_config, ScriptedTransport};

    fn png(size: usize) -> ImageFile {
        ImageFile {
            name: "silva.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0u8; size],
        }
    }

    fn uploader(transport: Rc<ScriptedTransport>) -> ImageUploader {
        let mut config = test_config();
        config.upload_url = "https://img.test/upload".into();
        ImageUploader::new(config, transport)
    }

    #[tokio::test]
    async fn test_upload_returns_secure_url() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(
            HttpMethod::Post,
            "https://img.test/upload",
            200,
            r#"{"secure_url":"https://img.test/v1/silva.png","bytes":16}"#,
        );
        let url = uploader(transport.clone()).upload(png(16)).await.unwrap();

        assert_eq!(url, "https://img.test/v1/silva.png");
        let request = &transport.requests()[0];
        assert_eq!(request.header_value("Authorization"), None);
        match &request.body {
            Some(RequestBody::Multipart(parts)) => {
                assert!(parts.iter().any(|p| matches!(
                    p,
                    MultipartPart::Text { name, value }
                        if name == "upload_preset" && value == "fleet_admin_profiles"
                )));
                assert!(parts
                    .iter()
                    .any(|p| matches!(p, MultipartPart::File { name, .. } if name == "file")));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_before_sending() {
        let transport = Rc::new(ScriptedTransport::new());
        let up = uploader(transport.clone());

        let mut pdf = png(10);
        pdf.content_type = "application/pdf".into();
        assert_eq!(up.upload(pdf).await, Err(UploadError::NotAnImage));
        assert_eq!(
            up.upload(png(6 * 1024 * 1024)).await,
            Err(UploadError::TooLarge { max_mb: 5 })
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_host_error_status() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.on_json(HttpMethod::Post, "https://img.test/upload", 400, "{}");
        let err = uploader(transport).upload(png(8)).await.unwrap_err();
        assert_eq!(err.to_string(), "Image upload failed (400)");
    }
}
