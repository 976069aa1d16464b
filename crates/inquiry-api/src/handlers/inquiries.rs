//! Inquiry handlers
//!
//! Endpoints for submitting, browsing, and managing inquiries.

use axum::{extract::State, Json};
use inquiry_service::{
    CreateInquiryRequest, InquiryResponse, InquiryService, PaginatedResponse, StatisticsResponse,
    StatisticsService, UpdateInquiryRequest,
};

use crate::extractors::{InquiryIdPath, InquiryListing, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// List inquiries with filtering, sorting, and pagination
///
/// GET /inquiries
pub async fn list_inquiries(
    State(state): State<AppState>,
    listing: InquiryListing,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<InquiryResponse>>>> {
    let service = InquiryService::new(state.service_context());
    let page = service
        .list_inquiries(listing.filter, listing.page, &listing.path)
        .await
        .map_err(|e| state.reject(e, "Failed to retrieve inquiries"))?;

    Ok(Json(ApiResponse::success(
        "Inquiries retrieved successfully",
        page,
    )))
}

/// Submit a new inquiry
///
/// POST /inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInquiryRequest>,
) -> ApiResult<Created<Json<ApiResponse<InquiryResponse>>>> {
    let service = InquiryService::new(state.service_context());
    let inquiry = service
        .create_inquiry(request)
        .await
        .map_err(|e| state.reject(e, "Failed to create inquiry"))?;

    Ok(Created(Json(ApiResponse::success(
        "Inquiry submitted successfully",
        inquiry,
    ))))
}

/// Get inquiry by ID
///
/// GET /inquiries/{id}
pub async fn get_inquiry(
    State(state): State<AppState>,
    InquiryIdPath(id): InquiryIdPath,
) -> ApiResult<Json<ApiResponse<InquiryResponse>>> {
    let service = InquiryService::new(state.service_context());
    let inquiry = service
        .get_inquiry(id)
        .await
        .map_err(|e| state.reject(e, "Failed to retrieve inquiry"))?;

    Ok(Json(ApiResponse::success(
        "Inquiry retrieved successfully",
        inquiry,
    )))
}

/// Partially update an inquiry
///
/// PUT /inquiries/{id}
/// PATCH /inquiries/{id}
pub async fn update_inquiry(
    State(state): State<AppState>,
    InquiryIdPath(id): InquiryIdPath,
    ValidatedJson(request): ValidatedJson<UpdateInquiryRequest>,
) -> ApiResult<Json<ApiResponse<InquiryResponse>>> {
    let service = InquiryService::new(state.service_context());
    let inquiry = service
        .update_inquiry(id, request)
        .await
        .map_err(|e| state.reject(e, "Failed to update inquiry"))?;

    Ok(Json(ApiResponse::success(
        "Inquiry updated successfully",
        inquiry,
    )))
}

/// Soft delete an inquiry
///
/// DELETE /inquiries/{id}
pub async fn delete_inquiry(
    State(state): State<AppState>,
    InquiryIdPath(id): InquiryIdPath,
) -> ApiResult<Json<ApiResponse<()>>> {
    let service = InquiryService::new(state.service_context());
    service
        .delete_inquiry(id)
        .await
        .map_err(|e| state.reject(e, "Failed to delete inquiry"))?;

    Ok(Json(ApiResponse::message("Inquiry deleted successfully")))
}

/// Aggregate counts by status, category, and priority
///
/// GET /inquiries/statistics
pub async fn get_statistics(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<StatisticsResponse>>> {
    let service = StatisticsService::new(state.service_context());
    let stats = service
        .get_statistics()
        .await
        .map_err(|e| state.reject(e, "Failed to retrieve statistics"))?;

    Ok(Json(ApiResponse::success(
        "Statistics retrieved successfully",
        stats,
    )))
}
