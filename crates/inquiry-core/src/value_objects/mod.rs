//! Value objects - immutable types that represent domain concepts

mod classification;
mod inquiry_id;
mod sorting;

pub use classification::{Category, InquiryStatus, InvalidValue, Priority};
pub use inquiry_id::{InquiryId, InquiryIdParseError};
pub use sorting::{Sort, SortField, SortOrder};
