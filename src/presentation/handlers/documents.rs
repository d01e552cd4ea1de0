use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::ErrorResponse;
use crate::domain::{schema, DocumentId, ProcessedDocument, ShipmentPatch, ShipmentRecord};
use crate::presentation::state::AppState;

/// One processed document as exposed over the API: metadata and the
/// committed record, never the retained bytes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: Uuid,
    pub file_name: String,
    pub file_kind: &'static str,
    pub uploaded_at: DateTime<Utc>,
    pub record: ShipmentRecord,
    /// Required schema keys still empty; surfaced, never enforced.
    pub missing_fields: Vec<&'static str>,
}

impl From<ProcessedDocument> for DocumentResponse {
    fn from(document: ProcessedDocument) -> Self {
        let missing_fields = schema::missing_fields(&document.record);
        Self {
            id: document.id.as_uuid(),
            file_name: document.file_name,
            file_kind: document.kind.as_str(),
            uploaded_at: document.uploaded_at,
            record: document.record,
            missing_fields,
        }
    }
}

pub async fn list_documents_handler(State(state): State<AppState>) -> impl IntoResponse {
    let documents: Vec<DocumentResponse> = state
        .store
        .list()
        .into_iter()
        .map(DocumentResponse::from)
        .collect();
    (StatusCode::OK, Json(documents))
}

pub async fn get_document_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get(DocumentId::from_uuid(id)) {
        Some(document) => {
            (StatusCode::OK, Json(DocumentResponse::from(document))).into_response()
        }
        None => not_found(id),
    }
}

/// Serves the retained upload bytes for preview/download, with the
/// original MIME type.
pub async fn document_file_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get(DocumentId::from_uuid(id)) {
        Some(document) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, document.kind.as_mime().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", document.file_name),
                ),
            ],
            document.content,
        )
            .into_response(),
        None => not_found(id),
    }
}

#[tracing::instrument(skip_all, fields(document_id = %id))]
pub async fn update_fields_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ShipmentPatch>,
) -> impl IntoResponse {
    let document_id = DocumentId::from_uuid(id);
    if !state.store.update_fields(document_id, patch) {
        return not_found(id);
    }
    match state.store.get(document_id) {
        Some(document) => {
            tracing::info!(document_id = %document_id, "Document fields updated");
            (StatusCode::OK, Json(DocumentResponse::from(document))).into_response()
        }
        None => not_found(id),
    }
}

fn not_found(id: Uuid) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("document not found: {}", id),
        }),
    )
        .into_response()
}
