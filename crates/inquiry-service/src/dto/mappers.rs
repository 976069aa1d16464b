//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use inquiry_core::entities::Inquiry;
use inquiry_core::traits::Page;

use super::responses::{InquiryResponse, PaginatedResponse, PaginationLinks, PaginationMeta};

// ============================================================================
// Inquiry Mappers
// ============================================================================

impl From<&Inquiry> for InquiryResponse {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id,
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            category: inquiry.category,
            subject: inquiry.subject.clone(),
            message: inquiry.message.clone(),
            status: inquiry.status,
            priority: inquiry.priority,
            resolved_at: inquiry.resolved_at,
            resolution_notes: inquiry.resolution_notes.clone(),
            created_at: inquiry.created_at,
            updated_at: inquiry.updated_at,
        }
    }
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self::from(&inquiry)
    }
}

// ============================================================================
// Pagination Mappers
// ============================================================================

impl<T> PaginatedResponse<T> {
    /// Build the response for a page, with links relative to `path`
    pub fn from_page<E>(page: Page<E>, path: &str) -> Self
    where
        T: From<E>,
    {
        let current_page = page.request.page();
        let per_page = page.request.per_page();
        let last_page = page.last_page();
        let link = |n: i64| format!("{path}?page={n}&per_page={per_page}");

        let meta = PaginationMeta {
            current_page,
            from: page.from(),
            last_page,
            path: path.to_string(),
            per_page,
            to: page.to(),
            total: page.total,
        };
        let current = i64::from(current_page);
        let links = PaginationLinks {
            first: link(1),
            last: link(last_page),
            prev: (current > 1).then(|| link(current - 1)),
            next: (current < last_page).then(|| link(current + 1)),
        };

        Self {
            data: page.items.into_iter().map(T::from).collect(),
            meta,
            links,
        }
    }
}
