use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::shipment::ShipmentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepted upload kinds, derived once at creation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Spreadsheet,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel" => Some(Self::Spreadsheet),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Some(Self::Spreadsheet)
        } else {
            None
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
        }
    }
}

/// One uploaded file together with its normalized shipment record.
///
/// `content` keeps the original bytes for preview/download; it lives only
/// for the session and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub id: DocumentId,
    pub file_name: String,
    pub kind: FileKind,
    pub uploaded_at: DateTime<Utc>,
    pub content: Bytes,
    pub record: ShipmentRecord,
}

impl ProcessedDocument {
    pub fn new(file_name: String, kind: FileKind, content: Bytes, record: ShipmentRecord) -> Self {
        Self {
            id: DocumentId::new(),
            file_name,
            kind,
            uploaded_at: Utc::now(),
            content,
            record,
        }
    }

    /// Original file name without its final extension, used to derive
    /// export file names.
    pub fn file_stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(pos) if pos > 0 => &self.file_name[..pos],
            _ => &self.file_name,
        }
    }
}
