mod documents;
mod edit;
mod export;
mod health;
mod selection;
mod upload;

pub use documents::{
    document_file_handler, get_document_handler, list_documents_handler, update_fields_handler,
    DocumentResponse,
};
pub use edit::{
    begin_edit_handler, discard_edit_handler, get_edit_handler, save_edit_handler,
    set_field_handler,
};
pub use export::{export_csv_handler, export_json_handler};
pub use health::health_handler;
pub use selection::{get_selection_handler, set_selection_handler};
pub use upload::{status_handler, upload_handler};

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
