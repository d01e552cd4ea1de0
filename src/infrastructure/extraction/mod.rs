mod mock_extractor;
mod remote_extractor;

pub use mock_extractor::MockExtractor;
pub use remote_extractor::{RemoteExtractor, RemoteShipmentFields};
