use std::sync::RwLock;

use crate::domain::{DocumentId, ProcessedDocument, ShipmentPatch};

#[derive(Default)]
struct StoreInner {
    /// Newest-first: uploads prepend.
    documents: Vec<ProcessedDocument>,
    selected: Option<DocumentId>,
}

/// In-memory session history of processed documents plus the current
/// selection. Append-only: documents are never removed, so a non-empty
/// selection always references a present document.
#[derive(Default)]
pub struct DocumentStore {
    inner: RwLock<StoreInner>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `document` to the history. Existing entries are untouched.
    pub fn add(&self, document: ProcessedDocument) {
        let mut inner = self.inner.write().expect("document store lock poisoned");
        inner.documents.insert(0, document);
    }

    /// Moves the selection. Selecting an unknown id fails and leaves both
    /// the history and the previous selection unchanged.
    pub fn select(&self, id: Option<DocumentId>) -> bool {
        let mut inner = self.inner.write().expect("document store lock poisoned");
        match id {
            Some(id) if !inner.documents.iter().any(|d| d.id == id) => false,
            _ => {
                inner.selected = id;
                true
            }
        }
    }

    /// Merges `patch` onto the matching document's record; present keys
    /// overwrite, absent keys are retained. No-op for an unknown id.
    pub fn update_fields(&self, id: DocumentId, patch: ShipmentPatch) -> bool {
        let mut inner = self.inner.write().expect("document store lock poisoned");
        match inner.documents.iter_mut().find(|d| d.id == id) {
            Some(document) => {
                document.record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Newest-first snapshot of the history.
    pub fn list(&self) -> Vec<ProcessedDocument> {
        let inner = self.inner.read().expect("document store lock poisoned");
        inner.documents.clone()
    }

    pub fn get(&self, id: DocumentId) -> Option<ProcessedDocument> {
        let inner = self.inner.read().expect("document store lock poisoned");
        inner.documents.iter().find(|d| d.id == id).cloned()
    }

    pub fn selected_id(&self) -> Option<DocumentId> {
        let inner = self.inner.read().expect("document store lock poisoned");
        inner.selected
    }

    pub fn selected(&self) -> Option<ProcessedDocument> {
        let inner = self.inner.read().expect("document store lock poisoned");
        inner
            .selected
            .and_then(|id| inner.documents.iter().find(|d| d.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("document store lock poisoned");
        inner.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
