mod document_store;
mod edit_session;
mod exporter;
mod upload_service;

pub use document_store::DocumentStore;
pub use edit_session::{Draft, EditError, EditSession};
pub use exporter::{ExportError, ExportFile, Exporter};
pub use upload_service::{UploadError, UploadService, UploadStatus, UploadedFile};
