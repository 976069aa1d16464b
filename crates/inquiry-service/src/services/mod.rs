//! Business logic services
//!
//! Services orchestrate repository calls, apply the inquiry workflow, and
//! shape results into response DTOs.

pub mod context;
pub mod error;
pub mod inquiry;
pub mod statistics;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use inquiry::InquiryService;
pub use statistics::StatisticsService;
