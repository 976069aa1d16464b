//! # inquiry-core
//!
//! Domain layer containing the inquiry entity, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Inquiry, InquiryChanges, NewInquiry, StatusTransition};
pub use error::DomainError;
pub use traits::{CountDimension, InquiryFilter, InquiryRepository, Page, PageRequest, RepoResult};
pub use value_objects::{
    Category, InquiryId, InquiryIdParseError, InquiryStatus, InvalidValue, Priority, Sort,
    SortField, SortOrder,
};
