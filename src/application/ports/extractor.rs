use async_trait::async_trait;

use crate::domain::{FileKind, ShipmentRecord};

/// Boundary to the external extraction service that turns raw document
/// bytes into a structured shipment record.
///
/// Either a fully normalized record comes back or an error; adapters never
/// return partially populated results, and nothing is retried here (a retry
/// is a user-initiated re-upload).
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(
        &self,
        file_name: &str,
        kind: FileKind,
        data: &[u8],
    ) -> Result<ShipmentRecord, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    /// Transport-level failure: the extraction endpoint was never reached.
    #[error("extraction service unreachable: {0}")]
    Network(String),
    /// The endpoint answered with a failure status or an unreadable body.
    /// Carries the server-supplied message verbatim when one exists.
    #[error("{0}")]
    Remote(String),
}
