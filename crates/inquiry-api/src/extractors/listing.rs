//! Listing extractor
//!
//! Turns the inquiry listing query string into a filter and a page request.
//! Nothing here is rejected: unknown sort input falls back to the default,
//! page sizes are clamped, and a repeated key keeps its last value.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use inquiry_core::traits::{InquiryFilter, PageRequest};
use inquiry_core::value_objects::Sort;

/// Raw listing query parameters
#[derive(Debug, Default)]
pub struct ListingParams {
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a numeric parameter, falling back to `default` when absent or malformed
fn number_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}

impl ListingParams {
    /// Collect known keys from decoded query pairs; later pairs overwrite earlier ones
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "status" => &mut params.status,
                "priority" => &mut params.priority,
                "search" => &mut params.search,
                "sort_by" => &mut params.sort_by,
                "sort_order" => &mut params.sort_order,
                "per_page" => &mut params.per_page,
                "page" => &mut params.page,
                _ => continue,
            };
            *slot = Some(value);
        }

        params
    }

    /// Split into the store filter and the page to fetch
    pub fn into_parts(self) -> (InquiryFilter, PageRequest) {
        let sort_by = present(self.sort_by);
        let sort_order = present(self.sort_order);
        let per_page = present(self.per_page);
        let page = present(self.page);

        let filter = InquiryFilter {
            category: present(self.category),
            status: present(self.status),
            priority: present(self.priority),
            search: present(self.search),
            sort: Sort::from_params(sort_by.as_deref(), sort_order.as_deref()),
        };
        let page = PageRequest::new(
            number_or(page.as_deref(), 1),
            number_or(
                per_page.as_deref(),
                i64::from(PageRequest::DEFAULT_PER_PAGE),
            ),
        );

        (filter, page)
    }
}

/// Parsed listing request
#[derive(Debug, Clone)]
pub struct InquiryListing {
    pub filter: InquiryFilter,
    pub page: PageRequest,
    /// Request path, used as the base of pagination links
    pub path: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for InquiryListing
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let (filter, page) = ListingParams::from_pairs(pairs).into_parts();
        Ok(InquiryListing {
            filter,
            page,
            path: parts.uri.path().to_string(),
        })
    }
}
