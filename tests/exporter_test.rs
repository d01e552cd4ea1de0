mod helpers;

use std::sync::Arc;

use bytes::Bytes;

use salalah::application::services::{DocumentStore, ExportError, Exporter};
use salalah::domain::{DocumentId, FileKind, ProcessedDocument, ShipmentRecord};

use helpers::sample_record;

fn store_with(record: ShipmentRecord) -> (Arc<DocumentStore>, Exporter, DocumentId) {
    let store = Arc::new(DocumentStore::new());
    let document = ProcessedDocument::new(
        "shipment manifest.pdf".to_string(),
        FileKind::Pdf,
        Bytes::from_static(b"%PDF-1.4"),
        record,
    );
    let id = document.id;
    store.add(document);
    let exporter = Exporter::new(Arc::clone(&store));
    (store, exporter, id)
}

#[test]
fn given_unknown_id_when_exporting_then_not_found() {
    let (_store, exporter, _id) = store_with(sample_record());

    let result = exporter.to_json(DocumentId::new());

    assert!(matches!(result, Err(ExportError::DocumentNotFound(_))));
}

#[test]
fn given_unmodified_document_when_exporting_twice_then_bytes_identical() {
    let (_store, exporter, id) = store_with(sample_record());

    assert_eq!(exporter.to_json(id).unwrap(), exporter.to_json(id).unwrap());
    assert_eq!(exporter.to_csv(id).unwrap(), exporter.to_csv(id).unwrap());
}

#[test]
fn given_json_export_when_parsed_back_then_record_round_trips() {
    let (_store, exporter, id) = store_with(sample_record());

    let file = exporter.to_json(id).unwrap();
    let parsed: ShipmentRecord = serde_json::from_slice(&file.bytes).unwrap();

    assert_eq!(parsed, sample_record());
}

#[test]
fn given_json_export_then_file_name_and_key_order_follow_schema() {
    let (_store, exporter, id) = store_with(sample_record());

    let file = exporter.to_json(id).unwrap();
    assert_eq!(file.file_name, "shipment manifest_data.json");
    assert_eq!(file.content_type, "application/json");

    let text = String::from_utf8(file.bytes).unwrap();
    let bol = text.find("billOfLadingNumber").unwrap();
    let container = text.find("containerNumber").unwrap();
    let price = text.find("averagePrice").unwrap();
    assert!(bol < container);
    assert!(container < price);
}

#[test]
fn given_csv_export_then_two_lines_with_schema_header() {
    let (_store, exporter, id) = store_with(sample_record());

    let file = exporter.to_csv(id).unwrap();
    assert_eq!(file.file_name, "shipment manifest_data.csv");
    assert_eq!(file.content_type, "text/csv");

    let text = String::from_utf8(file.bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "billOfLadingNumber,containerNumber,consigneeName,consigneeAddress,dateOfExport,lineItemsCount,averageGrossWeight,averagePrice"
    );
    assert!(lines[1].starts_with("\"BL123\","));
}

#[test]
fn given_value_with_comma_and_quote_when_exporting_csv_then_escaped() {
    let mut record = sample_record();
    record.consignee_address = "Unit \"B\", 12 Harbour Road".to_string();
    let (_store, exporter, id) = store_with(record);

    let file = exporter.to_csv(id).unwrap();
    let text = String::from_utf8(file.bytes).unwrap();

    assert!(text.contains("\"Unit \"\"B\"\", 12 Harbour Road\""));
}

#[test]
fn given_name_without_extension_when_exporting_then_whole_name_is_stem() {
    let store = Arc::new(DocumentStore::new());
    let document = ProcessedDocument::new(
        "manifest".to_string(),
        FileKind::Spreadsheet,
        Bytes::from_static(b"xlsx"),
        sample_record(),
    );
    let id = document.id;
    store.add(document);
    let exporter = Exporter::new(Arc::clone(&store));

    assert_eq!(exporter.to_json(id).unwrap().file_name, "manifest_data.json");
}

#[test]
fn given_edited_record_when_exporting_then_export_reflects_commit() {
    let (store, exporter, id) = store_with(sample_record());

    store.update_fields(
        id,
        salalah::domain::ShipmentPatch {
            bill_of_lading_number: Some("BL999".to_string()),
            ..Default::default()
        },
    );

    let file = exporter.to_json(id).unwrap();
    let parsed: ShipmentRecord = serde_json::from_slice(&file.bytes).unwrap();
    assert_eq!(parsed.bill_of_lading_number, "BL999");
}
