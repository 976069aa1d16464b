//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps are ISO 8601 with a numeric offset and whole seconds.

use chrono::{DateTime, Utc};
use serde::Serialize;

use inquiry_core::value_objects::{Category, InquiryId, InquiryStatus, Priority};

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    pub mod option {
        use super::{DateTime, Serializer, Utc};

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

// ============================================================================
// Inquiry Responses
// ============================================================================

/// Inquiry as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryResponse {
    pub id: InquiryId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: Category,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub priority: Priority,
    #[serde(with = "iso8601::option")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_notes: Option<String>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Page of results with offset pagination metadata and navigation links
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
    pub links: PaginationLinks,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    /// Position of the first item on this page; null when the page is empty
    pub from: Option<i64>,
    pub last_page: i64,
    /// Request path the links are built from
    pub path: String,
    pub per_page: u32,
    /// Position of the last item on this page; null when the page is empty
    pub to: Option<i64>,
    pub total: i64,
}

/// Links to neighbouring pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

// ============================================================================
// Statistics
// ============================================================================

/// Aggregate inquiry counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsResponse {
    pub total: i64,
    pub by_status: StatusCounts,
    pub by_category: CategoryCounts,
    pub by_priority: PriorityCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    #[serde(rename = "Trading")]
    pub trading: i64,
    #[serde(rename = "Market Data")]
    pub market_data: i64,
    #[serde(rename = "Technical Issues")]
    pub technical_issues: i64,
    #[serde(rename = "General Questions")]
    pub general_questions: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub urgent: i64,
}

impl StatusCounts {
    pub fn record(&mut self, status: InquiryStatus, count: i64) {
        match status {
            InquiryStatus::Pending => self.pending = count,
            InquiryStatus::InProgress => self.in_progress = count,
            InquiryStatus::Resolved => self.resolved = count,
            InquiryStatus::Closed => self.closed = count,
        }
    }

    pub fn sum(&self) -> i64 {
        self.pending + self.in_progress + self.resolved + self.closed
    }
}

impl CategoryCounts {
    pub fn record(&mut self, category: Category, count: i64) {
        match category {
            Category::Trading => self.trading = count,
            Category::MarketData => self.market_data = count,
            Category::TechnicalIssues => self.technical_issues = count,
            Category::GeneralQuestions => self.general_questions = count,
        }
    }
}

impl PriorityCounts {
    pub fn record(&mut self, priority: Priority, count: i64) {
        match priority {
            Priority::Low => self.low = count,
            Priority::Medium => self.medium = count,
            Priority::High => self.high = count,
            Priority::Urgent => self.urgent = count,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            success: true,
            message: "API is running".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
