use axum::middleware;
use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    begin_edit_handler, discard_edit_handler, document_file_handler, export_csv_handler,
    export_json_handler, get_document_handler, get_edit_handler, get_selection_handler,
    health_handler, list_documents_handler, save_edit_handler, set_field_handler,
    set_selection_handler, status_handler, update_fields_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/documents",
            get(list_documents_handler).post(upload_handler),
        )
        .route("/api/v1/documents/{id}", get(get_document_handler))
        .route("/api/v1/documents/{id}/file", get(document_file_handler))
        .route(
            "/api/v1/documents/{id}/fields",
            patch(update_fields_handler),
        )
        .route(
            "/api/v1/documents/{id}/export/json",
            get(export_json_handler),
        )
        .route("/api/v1/documents/{id}/export/csv", get(export_csv_handler))
        .route(
            "/api/v1/selection",
            get(get_selection_handler).put(set_selection_handler),
        )
        .route("/api/v1/status", get(status_handler))
        .route("/api/v1/edit", get(get_edit_handler))
        .route("/api/v1/edit/begin", post(begin_edit_handler))
        .route("/api/v1/edit/field", put(set_field_handler))
        .route("/api/v1/edit/save", post(save_edit_handler))
        .route("/api/v1/edit/discard", post(discard_edit_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
