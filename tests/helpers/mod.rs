#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Notify;

use salalah::application::ports::{Extractor, ExtractorError};
use salalah::application::services::UploadedFile;
use salalah::domain::{FileKind, ShipmentRecord};

pub fn sample_record() -> ShipmentRecord {
    ShipmentRecord {
        bill_of_lading_number: "BL123".to_string(),
        container_number: "MSKU1234567".to_string(),
        consignee_name: "Acme Imports Ltd".to_string(),
        consignee_address: "12 Harbour Road, Muscat".to_string(),
        date_of_export: "2025-06-01".to_string(),
        line_items_count: "3".to_string(),
        average_gross_weight: "1250.5".to_string(),
        average_price: "418.00".to_string(),
    }
}

pub fn uploaded_file(file_name: &str, content_type: Option<&str>, data: &[u8]) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: content_type.map(String::from),
        data: Bytes::copy_from_slice(data),
    }
}

pub enum ExtractorScript {
    Succeed(ShipmentRecord),
    FailRemote(String),
    FailNetwork(String),
}

/// Counts calls and answers from a fixed script.
pub struct ScriptedExtractor {
    script: ExtractorScript,
    pub calls: AtomicUsize,
}

impl ScriptedExtractor {
    pub fn new(script: ExtractorScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ExtractorScript::Succeed(sample_record()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Extractor for ScriptedExtractor {
    async fn extract(
        &self,
        _file_name: &str,
        _kind: FileKind,
        _data: &[u8],
    ) -> Result<ShipmentRecord, ExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            ExtractorScript::Succeed(record) => Ok(record.clone()),
            ExtractorScript::FailRemote(message) => Err(ExtractorError::Remote(message.clone())),
            ExtractorScript::FailNetwork(message) => Err(ExtractorError::Network(message.clone())),
        }
    }
}

/// Suspends inside `extract` until released, so tests can observe the
/// in-flight state.
#[derive(Default)]
pub struct BlockingExtractor {
    pub entered: Notify,
    pub release: Notify,
}

#[async_trait]
impl Extractor for BlockingExtractor {
    async fn extract(
        &self,
        _file_name: &str,
        _kind: FileKind,
        _data: &[u8],
    ) -> Result<ShipmentRecord, ExtractorError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(sample_record())
    }
}
