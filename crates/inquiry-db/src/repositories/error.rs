//! Error handling utilities for repositories

use inquiry_core::error::DomainError;
use inquiry_core::value_objects::InquiryId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create an "inquiry not found" error
pub fn inquiry_not_found(id: InquiryId) -> DomainError {
    DomainError::InquiryNotFound(id)
}

/// Error reported while the in-process store is switched off
pub fn store_unavailable() -> DomainError {
    DomainError::DatabaseError("inquiry store is unavailable".to_string())
}
