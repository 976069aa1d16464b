//! Axum extractors for request handling
//!
//! Custom extractors for validation, path ids, and listing parameters.

mod listing;
mod path;
mod validated;

pub use listing::{InquiryListing, ListingParams};
pub use path::InquiryIdPath;
pub use validated::ValidatedJson;
