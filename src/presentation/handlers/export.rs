use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use super::ErrorResponse;
use crate::application::services::{ExportError, ExportFile};
use crate::domain::DocumentId;
use crate::presentation::state::AppState;

pub async fn export_json_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    into_download(state.exporter.to_json(DocumentId::from_uuid(id)))
}

pub async fn export_csv_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    into_download(state.exporter.to_csv(DocumentId::from_uuid(id)))
}

fn into_download(result: Result<ExportFile, ExportError>) -> axum::response::Response {
    match result {
        Ok(file) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, file.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.file_name),
                ),
            ],
            file.bytes,
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                ExportError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
                ExportError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}
