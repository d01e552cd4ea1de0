mod helpers;

use std::sync::Arc;

use bytes::Bytes;

use salalah::application::services::{DocumentStore, EditError, EditSession};
use salalah::domain::{FileKind, ProcessedDocument};

use helpers::sample_record;

fn store_with_selected_document() -> (Arc<DocumentStore>, EditSession, salalah::domain::DocumentId)
{
    let store = Arc::new(DocumentStore::new());
    let document = ProcessedDocument::new(
        "invoice.pdf".to_string(),
        FileKind::Pdf,
        Bytes::from_static(b"%PDF-1.4"),
        sample_record(),
    );
    let id = document.id;
    store.add(document);
    store.select(Some(id));
    let session = EditSession::new(Arc::clone(&store));
    (store, session, id)
}

#[test]
fn given_no_selection_when_beginning_then_no_selection_error() {
    let store = Arc::new(DocumentStore::new());
    let session = EditSession::new(Arc::clone(&store));

    assert!(matches!(session.begin(), Err(EditError::NoSelection)));
}

#[test]
fn given_no_draft_when_setting_field_then_no_draft_error() {
    let (_store, session, _id) = store_with_selected_document();

    let result = session.set_field("containerNumber", "TGHU7654321".to_string());

    assert!(matches!(result, Err(EditError::NoDraft)));
}

#[test]
fn given_draft_edits_when_not_saved_then_committed_record_unchanged() {
    let (store, session, id) = store_with_selected_document();

    session.begin().unwrap();
    session
        .set_field("containerNumber", "TGHU7654321".to_string())
        .unwrap();
    session
        .set_field("averagePrice", "999.99".to_string())
        .unwrap();

    let committed = store.get(id).unwrap().record;
    assert_eq!(committed.container_number, "MSKU1234567");
    assert_eq!(committed.average_price, "418.00");
    assert!(session.is_dirty());
}

#[test]
fn given_dirty_draft_when_saving_then_all_edits_commit_and_others_stay() {
    let (store, session, id) = store_with_selected_document();

    session.begin().unwrap();
    session
        .set_field("containerNumber", "TGHU7654321".to_string())
        .unwrap();
    session
        .set_field("averagePrice", "999.99".to_string())
        .unwrap();
    session.save().unwrap();

    let committed = store.get(id).unwrap().record;
    assert_eq!(committed.container_number, "TGHU7654321");
    assert_eq!(committed.average_price, "999.99");
    assert_eq!(committed.bill_of_lading_number, "BL123");
    assert_eq!(committed.consignee_name, "Acme Imports Ltd");
    assert!(session.draft().is_none());
    assert!(!session.is_dirty());
}

#[test]
fn given_saved_draft_when_beginning_again_then_seeded_from_committed_record() {
    let (_store, session, _id) = store_with_selected_document();

    session.begin().unwrap();
    session
        .set_field("containerNumber", "TGHU7654321".to_string())
        .unwrap();
    session.save().unwrap();

    let draft = session.begin().unwrap();
    assert_eq!(draft.record.container_number, "TGHU7654321");
    assert!(!draft.dirty);
}

#[test]
fn given_draft_edits_when_discarding_then_committed_record_untouched() {
    let (store, session, id) = store_with_selected_document();

    session.begin().unwrap();
    session
        .set_field("consigneeName", "Someone Else".to_string())
        .unwrap();
    session.discard();

    assert_eq!(
        store.get(id).unwrap().record.consignee_name,
        "Acme Imports Ltd"
    );
    assert!(session.draft().is_none());
}

#[test]
fn given_unknown_field_when_setting_then_error_and_draft_unchanged() {
    let (_store, session, _id) = store_with_selected_document();

    session.begin().unwrap();
    let result = session.set_field("vesselName", "Ever Given".to_string());

    assert!(matches!(result, Err(EditError::UnknownField(_))));
    assert!(!session.is_dirty());
}

#[test]
fn given_selection_moved_when_saving_then_draft_rejected_and_dropped() {
    let (store, session, _first) = store_with_selected_document();
    let other = ProcessedDocument::new(
        "second.pdf".to_string(),
        FileKind::Pdf,
        Bytes::from_static(b"%PDF-1.4"),
        sample_record(),
    );
    let other_id = other.id;
    store.add(other);

    session.begin().unwrap();
    session
        .set_field("containerNumber", "TGHU7654321".to_string())
        .unwrap();
    store.select(Some(other_id));

    assert!(matches!(session.save(), Err(EditError::SelectionChanged)));
    assert!(session.draft().is_none());
    assert_eq!(
        store.get(other_id).unwrap().record.container_number,
        "MSKU1234567"
    );
}
