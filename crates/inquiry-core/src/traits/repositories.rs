//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Inquiry, InquiryChanges, NewInquiry, StatusTransition};
use crate::error::DomainError;
use crate::value_objects::{InquiryId, Sort};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Listing
// ============================================================================

/// Filters for inquiry listings. Every present filter must match.
///
/// Equality filters hold the raw requested value: a value outside the enum
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Case-insensitive substring matched against name, email, subject, or message
    pub search: Option<String>,
    pub sort: Sort,
}

impl InquiryFilter {
    /// Whether a stored inquiry satisfies every present filter
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        if inquiry.is_deleted() {
            return false;
        }
        if let Some(category) = &self.category {
            if inquiry.category.as_str() != category {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if inquiry.status.as_str() != status {
                return false;
            }
        }
        if let Some(priority) = &self.priority {
            if inquiry.priority.as_str() != priority {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystacks = [
                &inquiry.name,
                &inquiry.email,
                &inquiry.subject,
                &inquiry.message,
            ];
            if !haystacks
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

/// Page selection with the page size clamped to `1..=MAX_PER_PAGE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u32 = 15;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Out-of-range input is clamped rather than rejected
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.clamp(1, i64::from(u32::MAX)) as u32,
            per_page: per_page.clamp(1, i64::from(Self::MAX_PER_PAGE)) as u32,
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// Last page number; at least 1 even when empty
    pub fn last_page(&self) -> i64 {
        let per_page = self.request.limit();
        ((self.total + per_page - 1) / per_page).max(1)
    }

    /// 1-based position of the first item on this page, if any
    pub fn from(&self) -> Option<i64> {
        (!self.items.is_empty()).then(|| self.request.offset() + 1)
    }

    /// 1-based position of the last item on this page, if any
    pub fn to(&self) -> Option<i64> {
        self.from().map(|from| from + self.items.len() as i64 - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Attribute an aggregate count can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountDimension {
    Status,
    Category,
    Priority,
}

impl CountDimension {
    #[inline]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Category => "category",
            Self::Priority => "priority",
        }
    }

    /// Stored value of this dimension for an inquiry
    pub fn value_of(self, inquiry: &Inquiry) -> &'static str {
        match self {
            Self::Status => inquiry.status.as_str(),
            Self::Category => inquiry.category.as_str(),
            Self::Priority => inquiry.priority.as_str(),
        }
    }
}

// ============================================================================
// Inquiry Repository
// ============================================================================

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// List non-deleted inquiries matching the filter, one page at a time
    async fn list(&self, filter: &InquiryFilter, page: PageRequest) -> RepoResult<Page<Inquiry>>;

    /// Find a non-deleted inquiry by ID
    async fn find_by_id(&self, id: InquiryId) -> RepoResult<Option<Inquiry>>;

    /// Insert a new inquiry and return it with its generated id
    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry>;

    /// Apply a partial update atomically
    ///
    /// Fails with `InquiryNotFound` when the inquiry is missing or deleted.
    async fn update(
        &self,
        id: InquiryId,
        changes: InquiryChanges,
    ) -> RepoResult<(Inquiry, StatusTransition)>;

    /// Soft delete an inquiry, returning the deleted record
    ///
    /// Fails with `InquiryNotFound` when the inquiry is missing or already deleted.
    async fn soft_delete(&self, id: InquiryId) -> RepoResult<Inquiry>;

    /// Count of non-deleted inquiries
    async fn count_all(&self) -> RepoResult<i64>;

    /// Count of non-deleted inquiries grouped by the stored value of a dimension.
    /// Values with no inquiries are omitted.
    async fn count_by(&self, dimension: CountDimension) -> RepoResult<Vec<(String, i64)>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
