//! Schema bootstrap
//!
//! The DDL is idempotent, so it is safe to run on every startup.

use sqlx::PgPool;
use tracing::info;

const CREATE_INQUIRIES: &str = include_str!("../migrations/0001_create_inquiries.sql");

/// Create the `inquiries` table and its indexes if they do not exist
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_INQUIRIES).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
