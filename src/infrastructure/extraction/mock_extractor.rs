use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Extractor, ExtractorError};
use crate::domain::{FileKind, ShipmentRecord};

/// Scaffold-mode extractor: answers every upload with a canned record so
/// the service can run without the extraction collaborator.
pub struct MockExtractor {
    response_delay: Duration,
}

impl MockExtractor {
    pub fn new(response_delay: Duration) -> Self {
        Self { response_delay }
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(
        &self,
        file_name: &str,
        _kind: FileKind,
        _data: &[u8],
    ) -> Result<ShipmentRecord, ExtractorError> {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
        tracing::debug!(file_name = %file_name, "Scaffold extraction");
        Ok(ShipmentRecord {
            bill_of_lading_number: "MAEU123456789".to_string(),
            container_number: "MSKU1234567".to_string(),
            consignee_name: "Acme Imports Ltd".to_string(),
            consignee_address: "12 Harbour Road, Salalah".to_string(),
            date_of_export: "2025-06-01".to_string(),
            line_items_count: "3".to_string(),
            average_gross_weight: "1250.5".to_string(),
            average_price: "418.00".to_string(),
        })
    }
}
