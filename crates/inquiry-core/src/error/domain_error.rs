//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::InquiryId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Inquiry not found: {0}")]
    InquiryNotFound(InquiryId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InquiryNotFound(_) => "UNKNOWN_INQUIRY",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InquiryNotFound(_))
    }
}
