use std::sync::Arc;

use crate::application::services::DocumentStore;
use crate::domain::{schema, DocumentId, ProcessedDocument};

/// A serialized record ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Read-only serialization of a stored document's record. Never touches
/// the network or mutates the store; the only failure is an unknown id.
pub struct Exporter {
    store: Arc<DocumentStore>,
}

impl Exporter {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Pretty-printed JSON object with keys in schema order, named
    /// `<original-stem>_data.json`.
    pub fn to_json(&self, id: DocumentId) -> Result<ExportFile, ExportError> {
        let document = self.get(id)?;
        // ShipmentRecord declares its fields in schema order, which serde
        // preserves.
        let mut bytes = serde_json::to_vec_pretty(&document.record)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        bytes.push(b'\n');
        Ok(ExportFile {
            file_name: format!("{}_data.json", document.file_stem()),
            content_type: "application/json",
            bytes,
        })
    }

    /// Two-line CSV: header of schema keys, one data row with every value
    /// double-quoted and internal quotes doubled. Named
    /// `<original-stem>_data.csv`.
    pub fn to_csv(&self, id: DocumentId) -> Result<ExportFile, ExportError> {
        let document = self.get(id)?;
        let header = schema::FIELDS
            .iter()
            .map(|f| f.key)
            .collect::<Vec<_>>()
            .join(",");
        let row = schema::FIELDS
            .iter()
            .map(|f| {
                let value = document.record.field(f.key).unwrap_or_default();
                format!("\"{}\"", value.replace('"', "\"\""))
            })
            .collect::<Vec<_>>()
            .join(",");
        Ok(ExportFile {
            file_name: format!("{}_data.csv", document.file_stem()),
            content_type: "text/csv",
            bytes: format!("{header}\n{row}").into_bytes(),
        })
    }

    fn get(&self, id: DocumentId) -> Result<ProcessedDocument, ExportError> {
        self.store.get(id).ok_or(ExportError::DocumentNotFound(id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),
    #[error("serialization failed: {0}")]
    Serialization(String),
}
