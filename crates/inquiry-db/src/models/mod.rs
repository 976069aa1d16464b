//! Database models - SQLx-compatible structs for PostgreSQL rows

mod inquiry;

pub use inquiry::{GroupCountModel, InquiryModel};
