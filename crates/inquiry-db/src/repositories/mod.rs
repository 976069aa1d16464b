//! Repository implementations
//!
//! Implementations of `InquiryRepository` from inquiry-core.

mod error;
mod inquiry;
mod memory;

pub use inquiry::PgInquiryRepository;
pub use memory::MemoryInquiryRepository;
