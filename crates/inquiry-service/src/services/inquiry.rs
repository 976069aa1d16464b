//! Inquiry service
//!
//! Handles listing, submission, updates, and soft deletion of inquiries.

use inquiry_core::traits::{InquiryFilter, PageRequest};
use inquiry_core::value_objects::InquiryId;
use tracing::{error, info, instrument, warn};

use crate::dto::{CreateInquiryRequest, InquiryResponse, PaginatedResponse, UpdateInquiryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Log a failed operation; missing records are expected and stay below error level
fn log_failure(operation: &'static str, id: Option<InquiryId>, err: &ServiceError) {
    let inquiry_id = id.map(InquiryId::into_inner);
    if err.is_not_found() {
        warn!(operation, ?inquiry_id, "Inquiry not found");
    } else {
        error!(operation, ?inquiry_id, error = %err, "Inquiry operation failed");
    }
}

/// Inquiry service
pub struct InquiryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InquiryService<'a> {
    /// Create a new InquiryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List non-deleted inquiries matching `filter`, one page at a time
    ///
    /// `path` is the request path the pagination links are built from.
    #[instrument(skip(self))]
    pub async fn list_inquiries(
        &self,
        filter: InquiryFilter,
        page: PageRequest,
        path: &str,
    ) -> ServiceResult<PaginatedResponse<InquiryResponse>> {
        let result = self
            .ctx
            .inquiry_repo()
            .list(&filter, page)
            .await
            .map_err(ServiceError::from);

        match result {
            Ok(page) => Ok(PaginatedResponse::from_page(page, path)),
            Err(err) => {
                error!(?filter, error = %err, "Error fetching inquiries");
                Err(err)
            }
        }
    }

    /// Get a single inquiry by ID
    #[instrument(skip(self))]
    pub async fn get_inquiry(&self, id: InquiryId) -> ServiceResult<InquiryResponse> {
        let result = match self.ctx.inquiry_repo().find_by_id(id).await {
            Ok(Some(inquiry)) => Ok(InquiryResponse::from(&inquiry)),
            Ok(None) => Err(ServiceError::not_found("Inquiry", id.to_string())),
            Err(err) => Err(err.into()),
        };

        result.inspect_err(|err| log_failure("get_inquiry", Some(id), err))
    }

    /// Submit a new inquiry
    ///
    /// New inquiries start as pending with no resolution.
    #[instrument(skip(self, request))]
    pub async fn create_inquiry(
        &self,
        request: CreateInquiryRequest,
    ) -> ServiceResult<InquiryResponse> {
        let new_inquiry = request.into_new_inquiry()?;

        let inquiry = self
            .ctx
            .inquiry_repo()
            .create(&new_inquiry)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|err| {
                error!(
                    category = %new_inquiry.category,
                    email = %new_inquiry.email,
                    error = %err,
                    "Error creating inquiry"
                );
            })?;

        info!(
            inquiry_id = %inquiry.id,
            category = %inquiry.category,
            email = %inquiry.email,
            "New inquiry created"
        );

        Ok(InquiryResponse::from(&inquiry))
    }

    /// Apply a partial update
    ///
    /// Moving an inquiry into `resolved` stamps its resolution time.
    #[instrument(skip(self, request))]
    pub async fn update_inquiry(
        &self,
        id: InquiryId,
        request: UpdateInquiryRequest,
    ) -> ServiceResult<InquiryResponse> {
        let changes = request.into_changes()?;
        let updated_fields = changes.field_names();

        let (inquiry, transition) = self
            .ctx
            .inquiry_repo()
            .update(id, changes)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|err| log_failure("update_inquiry", Some(id), err))?;

        info!(
            inquiry_id = %inquiry.id,
            ?updated_fields,
            old_status = %transition.previous,
            new_status = %transition.current,
            resolved_stamped = transition.resolved_stamped,
            "Inquiry updated"
        );

        Ok(InquiryResponse::from(&inquiry))
    }

    /// Soft delete an inquiry
    #[instrument(skip(self))]
    pub async fn delete_inquiry(&self, id: InquiryId) -> ServiceResult<bool> {
        let inquiry = self
            .ctx
            .inquiry_repo()
            .soft_delete(id)
            .await
            .map_err(ServiceError::from)
            .inspect_err(|err| log_failure("delete_inquiry", Some(id), err))?;

        info!(inquiry_id = %id, category = %inquiry.category, "Inquiry deleted");

        Ok(inquiry.is_deleted())
    }
}
