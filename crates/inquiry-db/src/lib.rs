//! # inquiry-db
//!
//! Database layer implementing the inquiry repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema bootstrap and sample data
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `PgInquiryRepository`, plus `MemoryInquiryRepository` for tests and
//!   running without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inquiry_db::{apply_schema, create_pool, DatabaseConfig, PgInquiryRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/inquiries")).await?;
//!     apply_schema(&pool).await?;
//!     let repo = PgInquiryRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{MemoryInquiryRepository, PgInquiryRepository};
pub use schema::apply_schema;
pub use seed::{sample_inquiries, seed_sample_data, SampleInquiry};
