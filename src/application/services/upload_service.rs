use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{Extractor, ExtractorError};
use crate::application::services::DocumentStore;
use crate::domain::{DocumentId, FileKind, ProcessedDocument};

/// One file as received from the caller, before any validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Kind declared by the upload: MIME type first, filename extension as
    /// fallback, both case-insensitive.
    pub fn kind(&self) -> Option<FileKind> {
        self.content_type
            .as_deref()
            .and_then(FileKind::from_mime)
            .or_else(|| FileKind::from_file_name(&self.file_name))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatus {
    pub processing: bool,
    pub last_error: Option<String>,
}

/// Coordinates one upload end to end: validate, extract, store, select.
///
/// The only writer that creates documents. A single upload may be in flight
/// at a time; the processing flag makes that invariant hard rather than
/// advisory, so a concurrent call is rejected instead of interleaving with
/// the suspended extraction.
pub struct UploadService {
    extractor: Arc<dyn Extractor>,
    store: Arc<DocumentStore>,
    processing: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl UploadService {
    pub fn new(extractor: Arc<dyn Extractor>, store: Arc<DocumentStore>) -> Self {
        Self {
            extractor,
            store,
            processing: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    #[tracing::instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn upload(&self, file: UploadedFile) -> Result<DocumentId, UploadError> {
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Upload rejected: another upload is in flight");
            return Err(UploadError::Busy);
        }

        self.set_last_error(None);

        let result = self.run(file).await;
        if let Err(e) = &result {
            self.set_last_error(Some(e.to_string()));
        }

        // Exactly one processing -> idle transition per call, on every path.
        self.processing.store(false, Ordering::Release);

        result
    }

    async fn run(&self, file: UploadedFile) -> Result<DocumentId, UploadError> {
        if file.data.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        let kind = file.kind().ok_or_else(|| {
            UploadError::UnsupportedFileType(
                file.content_type
                    .clone()
                    .unwrap_or_else(|| file.file_name.clone()),
            )
        })?;

        tracing::debug!(kind = kind.as_str(), bytes = file.data.len(), "Extracting document");

        let record = self
            .extractor
            .extract(&file.file_name, kind, &file.data)
            .await?;

        let document = ProcessedDocument::new(file.file_name, kind, file.data, record);
        let id = document.id;
        self.store.add(document);
        self.store.select(Some(id));

        tracing::info!(document_id = %id, "Document processed and selected");
        Ok(id)
    }

    pub fn status(&self) -> UploadStatus {
        UploadStatus {
            processing: self.processing.load(Ordering::Acquire),
            last_error: self
                .last_error
                .read()
                .expect("last error lock poisoned")
                .clone(),
        }
    }

    fn set_last_error(&self, error: Option<String>) {
        *self.last_error.write().expect("last error lock poisoned") = error;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("another upload is already in progress")]
    Busy,
    #[error("uploaded file is empty")]
    EmptyFile,
    #[error("invalid file type: {0}. Please upload a PDF or Excel file")]
    UnsupportedFileType(String),
    #[error(transparent)]
    Extraction(#[from] ExtractorError),
}
