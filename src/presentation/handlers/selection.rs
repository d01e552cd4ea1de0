use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DocumentResponse, ErrorResponse};
use crate::domain::DocumentId;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub document_id: Option<Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub document: Option<DocumentResponse>,
}

pub async fn get_selection_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SelectionResponse {
            document: state.store.selected().map(DocumentResponse::from),
        }),
    )
}

/// Moves (or clears) the current selection. Any in-progress draft belongs
/// to the previous selection and is discarded uncommitted.
#[tracing::instrument(skip(state, request))]
pub async fn set_selection_handler(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> impl IntoResponse {
    let id = request.document_id.map(DocumentId::from_uuid);
    if !state.store.select(id) {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!(
                    "document not found: {}",
                    request.document_id.unwrap_or_default()
                ),
            }),
        )
            .into_response();
    }
    state.edit_session.discard();

    (
        StatusCode::OK,
        Json(SelectionResponse {
            document: state.store.selected().map(DocumentResponse::from),
        }),
    )
        .into_response()
}
