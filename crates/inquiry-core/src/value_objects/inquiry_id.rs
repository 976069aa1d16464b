//! Inquiry ID - database-generated 64-bit identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of an inquiry, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(i64);

impl InquiryId {
    /// Create an InquiryId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from a path segment or other string input
    pub fn parse(s: &str) -> Result<Self, InquiryIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(InquiryId)
            .map_err(|_| InquiryIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing an InquiryId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryIdParseError {
    #[error("invalid inquiry id: {0}")]
    InvalidFormat(String),
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for InquiryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<InquiryId> for i64 {
    fn from(id: InquiryId) -> Self {
        id.0
    }
}

impl std::str::FromStr for InquiryId {
    type Err = InquiryIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryId::parse(s)
    }
}
