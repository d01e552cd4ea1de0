pub mod extraction;
pub mod observability;
