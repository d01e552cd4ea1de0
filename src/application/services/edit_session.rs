use std::sync::{Arc, RwLock};

use crate::application::services::DocumentStore;
use crate::domain::{DocumentId, ShipmentPatch, ShipmentRecord};

/// An uncommitted working copy of the selected document's record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub document_id: DocumentId,
    pub record: ShipmentRecord,
    pub dirty: bool,
}

/// Tracks in-progress edits to the currently selected document, decoupled
/// from the committed record until `save` or `discard`.
///
/// The only writer that mutates an existing document's fields. A draft is
/// bound to the document that was selected at `begin`; moving the selection
/// discards it, and `save` re-checks the binding in case a selection change
/// raced past the caller.
pub struct EditSession {
    store: Arc<DocumentStore>,
    draft: RwLock<Option<Draft>>,
}

impl EditSession {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            draft: RwLock::new(None),
        }
    }

    /// Starts a draft seeded from the selected document's committed record.
    /// Replaces any previous draft.
    pub fn begin(&self) -> Result<Draft, EditError> {
        let document = self.store.selected().ok_or(EditError::NoSelection)?;
        let draft = Draft {
            document_id: document.id,
            record: document.record,
            dirty: false,
        };
        *self.draft.write().expect("edit session lock poisoned") = Some(draft.clone());
        Ok(draft)
    }

    /// Mutates exactly one field of the draft and marks it dirty.
    pub fn set_field(&self, key: &str, value: String) -> Result<(), EditError> {
        let mut guard = self.draft.write().expect("edit session lock poisoned");
        let draft = guard.as_mut().ok_or(EditError::NoDraft)?;
        if !draft.record.set_field(key, value) {
            return Err(EditError::UnknownField(key.to_string()));
        }
        draft.dirty = true;
        Ok(())
    }

    /// Commits the whole draft onto the committed record in one merge, then
    /// clears the session. All-or-nothing: no field reaches the store
    /// before this call.
    pub fn save(&self) -> Result<ShipmentRecord, EditError> {
        let mut guard = self.draft.write().expect("edit session lock poisoned");
        let draft = guard.take().ok_or(EditError::NoDraft)?;
        if self.store.selected_id() != Some(draft.document_id) {
            // Selection moved since begin; the draft no longer belongs to
            // the visible document and is dropped uncommitted.
            return Err(EditError::SelectionChanged);
        }
        self.store
            .update_fields(draft.document_id, ShipmentPatch::from(draft.record.clone()));
        Ok(draft.record)
    }

    /// Drops the draft without committing anything.
    pub fn discard(&self) {
        *self.draft.write().expect("edit session lock poisoned") = None;
    }

    pub fn draft(&self) -> Option<Draft> {
        self.draft
            .read()
            .expect("edit session lock poisoned")
            .clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft()
            .map(|d| d.dirty)
            .unwrap_or(false)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("no document selected")]
    NoSelection,
    #[error("no edit in progress")]
    NoDraft,
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("selection changed since the edit began")]
    SelectionChanged,
}
