use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ErrorResponse;
use crate::application::services::{Draft, EditError};
use crate::domain::ShipmentRecord;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub document_id: Uuid,
    pub record: ShipmentRecord,
    pub dirty: bool,
}

impl From<Draft> for DraftResponse {
    fn from(draft: Draft) -> Self {
        Self {
            document_id: draft.document_id.as_uuid(),
            record: draft.record,
            dirty: draft.dirty,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditStateResponse {
    pub draft: Option<DraftResponse>,
}

#[derive(Deserialize)]
pub struct SetFieldRequest {
    pub key: String,
    pub value: String,
}

pub async fn get_edit_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(EditStateResponse {
            draft: state.edit_session.draft().map(DraftResponse::from),
        }),
    )
}

pub async fn begin_edit_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.edit_session.begin() {
        Ok(draft) => (StatusCode::OK, Json(DraftResponse::from(draft))).into_response(),
        Err(e) => edit_error(e),
    }
}

pub async fn set_field_handler(
    State(state): State<AppState>,
    Json(request): Json<SetFieldRequest>,
) -> impl IntoResponse {
    match state.edit_session.set_field(&request.key, request.value) {
        Ok(()) => (
            StatusCode::OK,
            Json(EditStateResponse {
                draft: state.edit_session.draft().map(DraftResponse::from),
            }),
        )
            .into_response(),
        Err(e) => edit_error(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn save_edit_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.edit_session.save() {
        Ok(record) => {
            tracing::info!("Draft committed");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => edit_error(e),
    }
}

pub async fn discard_edit_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.edit_session.discard();
    StatusCode::NO_CONTENT.into_response()
}

fn edit_error(e: EditError) -> axum::response::Response {
    let status = match &e {
        EditError::NoSelection | EditError::NoDraft => StatusCode::CONFLICT,
        EditError::UnknownField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EditError::SelectionChanged => StatusCode::CONFLICT,
    };
    (status, Json(ErrorResponse { error: e.to_string() })).into_response()
}
