//! Model to entity mappers
//!
//! - `TryFrom<InquiryModel> for Inquiry`: rows carry enum columns as text
//! - `InquiryWrite`: borrowed column values for the UPDATE statement

mod inquiry;

pub use inquiry::InquiryWrite;
