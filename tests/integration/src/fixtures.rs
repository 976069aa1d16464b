//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of API responses.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create inquiry request
#[derive(Debug, Clone, Serialize)]
pub struct CreateInquiryRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub category: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl CreateInquiryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Customer {suffix}"),
            email: format!("customer{suffix}@example.com"),
            phone: None,
            category: "Trading".to_string(),
            subject: format!("Order question {suffix}"),
            message: "My limit order was not filled at the expected price.".to_string(),
            priority: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = Some(priority.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Error envelope
pub type ErrorEnvelope = Envelope<serde_json::Value>;

/// Inquiry response
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub priority: String,
    pub resolved_at: Option<String>,
    pub resolution_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Paginated listing
#[derive(Debug, Deserialize)]
pub struct InquiryPage {
    pub data: Vec<InquiryResponse>,
    pub meta: PageMeta,
    pub links: PageLinks,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub from: Option<i64>,
    pub last_page: i64,
    pub path: String,
    pub per_page: u32,
    pub to: Option<i64>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Statistics response
#[derive(Debug, Deserialize)]
pub struct Statistics {
    pub total: i64,
    pub by_status: BTreeMap<String, i64>,
    pub by_category: BTreeMap<String, i64>,
    pub by_priority: BTreeMap<String, i64>,
}
