//! # inquiry-service
//!
//! Application layer containing the inquiry use cases, request validation, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    not_a_string, CreateInquiryRequest, HealthChecks, HealthResponse, InquiryResponse,
    PaginatedResponse, PaginationLinks, PaginationMeta, ReadinessResponse, StatisticsResponse,
    TextFields, UpdateInquiryRequest,
};
pub use services::{
    InquiryService, ServiceContext, ServiceError, ServiceResult, StatisticsService,
};
