//! Domain entities - core business objects

mod inquiry;

pub use inquiry::{Inquiry, InquiryChanges, NewInquiry, StatusTransition};
