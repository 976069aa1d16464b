//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CountDimension, InquiryFilter, InquiryRepository, Page, PageRequest, RepoResult,
};
