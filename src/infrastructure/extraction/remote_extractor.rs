use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{Extractor, ExtractorError};
use crate::domain::{FileKind, ShipmentRecord};

/// Adapter for the external extraction endpoint: one multipart POST per
/// document, one JSON record back. No polling, no retries.
pub struct RemoteExtractor {
    client: Client,
    endpoint: String,
}

impl RemoteExtractor {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Extractor for RemoteExtractor {
    #[tracing::instrument(skip_all, fields(file_name = %file_name, kind = kind.as_str()))]
    async fn extract(
        &self,
        file_name: &str,
        kind: FileKind,
        data: &[u8],
    ) -> Result<ShipmentRecord, ExtractorError> {
        let part = Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str(kind.as_mime())
            .map_err(|e| ExtractorError::Network(e.to_string()))?;
        let form = Form::new().part("files", part);

        let url = format!("{}/process-documents", self.endpoint);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RemoteErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("extraction service returned status {}", status.as_u16()));
            tracing::warn!(status = status.as_u16(), "Extraction request failed");
            return Err(ExtractorError::Remote(message));
        }

        let fields: RemoteShipmentFields = response.json().await.map_err(|_| {
            ExtractorError::Remote("extraction service returned an unreadable response".to_string())
        })?;

        Ok(fields.into())
    }
}

/// Error body shape of the collaborator: `message` is used verbatim when
/// present.
#[derive(Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
}

/// The collaborator's success body: flat snake_case business keys. Every
/// field defaults so an absent key normalizes to an explicit empty string
/// instead of an omission; non-string scalars (counts, weights, prices)
/// are stringified as-is.
#[derive(Debug, Default, Deserialize)]
pub struct RemoteShipmentFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub bill_of_lading_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub consignee_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub consignee_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_of_export: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub line_items_count: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub average_gross_weight: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub average_price: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl From<RemoteShipmentFields> for ShipmentRecord {
    fn from(fields: RemoteShipmentFields) -> Self {
        Self {
            bill_of_lading_number: fields.bill_of_lading_number,
            container_number: fields.container_number,
            consignee_name: fields.consignee_name,
            consignee_address: fields.consignee_address,
            date_of_export: fields.date_of_export,
            line_items_count: fields.line_items_count,
            average_gross_weight: fields.average_gross_weight,
            average_price: fields.average_price,
        }
    }
}
