//! Service context - dependency container for services

use std::sync::Arc;

use inquiry_core::traits::InquiryRepository;

/// Service context containing all dependencies
///
/// Services borrow the context for the duration of a call, so it is cheap
/// to clone into handler state.
#[derive(Clone)]
pub struct ServiceContext {
    inquiry_repo: Arc<dyn InquiryRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(inquiry_repo: Arc<dyn InquiryRepository>) -> Self {
        Self { inquiry_repo }
    }

    /// Get the inquiry repository
    pub fn inquiry_repo(&self) -> &dyn InquiryRepository {
        self.inquiry_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("inquiry_repo", &"dyn InquiryRepository")
            .finish()
    }
}
