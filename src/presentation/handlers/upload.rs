use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{DocumentResponse, ErrorResponse};
use crate::application::services::{UploadError, UploadedFile};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let file_name = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field.content_type().map(String::from);

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(file_name = %file_name, bytes = data.len(), "File data received");

    let file = UploadedFile {
        file_name,
        content_type,
        data,
    };

    match state.upload_service.upload(file).await {
        Ok(id) => match state.store.get(id) {
            Some(document) => {
                (StatusCode::CREATED, Json(DocumentResponse::from(document))).into_response()
            }
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "document vanished after upload".to_string(),
                }),
            )
                .into_response(),
        },
        Err(e) => {
            let status = match &e {
                UploadError::Busy => StatusCode::CONFLICT,
                UploadError::EmptyFile => StatusCode::UNPROCESSABLE_ENTITY,
                UploadError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                UploadError::Extraction(_) => StatusCode::BAD_GATEWAY,
            };
            tracing::warn!(error = %e, "Upload failed");
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}

/// Upload-state probe: whether an upload is in flight and the last error.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.upload_service.status()))
}
