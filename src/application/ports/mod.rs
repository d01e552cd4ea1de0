mod extractor;

pub use extractor::{Extractor, ExtractorError};
