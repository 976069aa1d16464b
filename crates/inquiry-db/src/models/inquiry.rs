//! Inquiry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the inquiries table
#[derive(Debug, Clone, FromRow)]
pub struct InquiryModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub priority: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl InquiryModel {
    /// Column list matching the struct fields, for SELECT and RETURNING clauses
    pub const COLUMNS: &'static str = "id, name, email, phone, category, subject, message, \
        status, priority, resolved_at, resolution_notes, created_at, updated_at, deleted_at";
}

/// One row of a `GROUP BY` count
#[derive(Debug, Clone, FromRow)]
pub struct GroupCountModel {
    pub value: String,
    pub count: i64,
}
