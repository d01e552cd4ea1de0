use std::sync::Arc;

use crate::application::services::{DocumentStore, EditSession, Exporter, UploadService};

/// Shared session state: the document history plus every service operating
/// on it. One instance per server process; the session lives exactly as
/// long as the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub upload_service: Arc<UploadService>,
    pub edit_session: Arc<EditSession>,
    pub exporter: Arc<Exporter>,
}

impl AppState {
    /// Wires the services around one shared [`DocumentStore`].
    pub fn new(upload_service: UploadService, store: Arc<DocumentStore>) -> Self {
        Self {
            upload_service: Arc::new(upload_service),
            edit_session: Arc::new(EditSession::new(Arc::clone(&store))),
            exporter: Arc::new(Exporter::new(Arc::clone(&store))),
            store,
        }
    }
}
