//! Uploaded document handling: multipart intake, type detection, and text extraction.
//!
//! PDFs go through `pdf-extract` on a blocking thread. JPEG/PNG images are written to a
//! temp file and read back through the `tesseract` executable. Every other type is rejected.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Jpeg,
    Png,
}

impl DocumentKind {
    /// Classifies a MIME type, ignoring parameters such as `; charset=...`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            "image/jpeg" => Some(DocumentKind::Jpeg),
            "image/png" => Some(DocumentKind::Png),
            _ => None,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Jpeg => ".jpg",
            DocumentKind::Png => ".png",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A parsed multipart body: at most one file part plus the text fields.
#[derive(Debug, Default)]
pub struct Upload {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl Upload {
    /// Text field value, or empty when the client omitted it.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// The uploaded file and its detected kind.
    pub fn document(&self) -> Result<(DocumentKind, &UploadedFile), AppError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| AppError::Validation("No file was uploaded.".to_string()))?;

        let kind = file
            .content_type
            .as_deref()
            .and_then(DocumentKind::from_mime)
            .ok_or_else(|| AppError::Validation("Unsupported file type.".to_string()))?;

        Ok((kind, file))
    }
}

/// Drains a multipart body, keeping the part named `file_field` as the upload.
pub async fn read_upload(mut multipart: Multipart, file_field: &str) -> Result<Upload, AppError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        if name == file_field {
            let file_name = field.file_name().map(String::from);
            let content_type = field.content_type().map(String::from);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            debug!(
                "Received upload {:?} ({:?}, {} bytes)",
                file_name,
                content_type,
                bytes.len()
            );
            upload.file = Some(UploadedFile { content_type, bytes });
        } else {
            let value = field.text().await.map_err(|e| {
                AppError::Validation(format!("Failed to read field '{name}': {e}"))
            })?;
            upload.fields.insert(name, value);
        }
    }

    Ok(upload)
}

/// Extracts plain text from a document. Empty results are an extraction failure.
pub async fn extract_text(
    kind: DocumentKind,
    bytes: Bytes,
    config: &Config,
) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes).await?,
        DocumentKind::Jpeg | DocumentKind::Png => {
            let timeout = Duration::from_secs(config.ocr_timeout_secs);
            ocr_image(kind, &bytes, &config.tesseract_bin, timeout).await?
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Extraction(
            "No readable text found in document".to_string(),
        ));
    }

    info!(
        "Extracted {} chars from {:?} upload",
        text.chars().count(),
        kind
    );
    Ok(text)
}

async fn extract_pdf(bytes: Bytes) -> Result<String, AppError> {
    // pdf-extract is synchronous and can panic on malformed input; both land here.
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::Extraction(format!("PDF extraction aborted: {e}")))?
    .map_err(|e| AppError::Extraction(format!("PDF extraction failed: {e}")))
}

async fn ocr_image(
    kind: DocumentKind,
    bytes: &[u8],
    tesseract_bin: &str,
    timeout: Duration,
) -> Result<String, AppError> {
    let image = tempfile::Builder::new()
        .prefix("cypher-upload-")
        .suffix(kind.suffix())
        .tempfile()
        .context("Failed to create temp file for OCR")?;

    tokio::fs::write(image.path(), bytes)
        .await
        .context("Failed to write upload for OCR")?;

    // The child is killed if the request is dropped or the timeout fires.
    let run = Command::new(tesseract_bin)
        .arg(image.path())
        .arg("stdout")
        .args(["-l", "eng"])
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(timeout, run)
        .await
        .map_err(|_| {
            AppError::Extraction(format!("OCR timed out after {}s", timeout.as_secs_f32()))
        })?
        .map_err(|e| AppError::Extraction(format!("Failed to run '{tesseract_bin}': {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Extraction(format!("OCR failed: {}", stderr.trim())));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
