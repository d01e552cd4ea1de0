mod document;
pub mod schema;
mod shipment;

pub use document::{DocumentId, FileKind, ProcessedDocument};
pub use schema::FieldDef;
pub use shipment::{ShipmentPatch, ShipmentRecord};
