//! PostgreSQL implementation of InquiryRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use inquiry_core::entities::{Inquiry, InquiryChanges, NewInquiry, StatusTransition};
use inquiry_core::traits::{
    CountDimension, InquiryFilter, InquiryRepository, Page, PageRequest, RepoResult,
};
use inquiry_core::value_objects::InquiryId;

use crate::mappers::InquiryWrite;
use crate::models::{GroupCountModel, InquiryModel};

use super::error::{inquiry_not_found, map_db_error};

/// PostgreSQL implementation of InquiryRepository
#[derive(Clone)]
pub struct PgInquiryRepository {
    pool: PgPool,
}

impl PgInquiryRepository {
    /// Create a new PgInquiryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an inquiry by ID whether or not it has been soft deleted
    #[instrument(skip(self))]
    pub async fn find_including_deleted(&self, id: InquiryId) -> RepoResult<Option<Inquiry>> {
        let result = sqlx::query_as::<_, InquiryModel>(&format!(
            "SELECT {} FROM inquiries WHERE id = $1",
            InquiryModel::COLUMNS
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Inquiry::try_from).transpose()
    }
}

/// Escape LIKE wildcards and wrap the term for substring matching
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Append the WHERE clause for a listing filter
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &InquiryFilter) {
    builder.push(" WHERE deleted_at IS NULL");

    if let Some(category) = &filter.category {
        builder.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(status) = &filter.status {
        builder.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(priority) = &filter.priority {
        builder.push(" AND priority = ").push_bind(priority.clone());
    }
    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR subject ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR message ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl InquiryRepository for PgInquiryRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: &InquiryFilter, page: PageRequest) -> RepoResult<Page<Inquiry>> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM inquiries");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM inquiries",
            InquiryModel::COLUMNS
        ));
        push_filters(&mut query, filter);
        // Column and direction come from closed enums, never from raw input
        let order = filter.sort.order.as_sql();
        query.push(format!(
            " ORDER BY {column} {order}, id {order}",
            column = filter.sort.field.column()
        ));
        query
            .push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = query
            .build_query_as::<InquiryModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(Inquiry::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        debug!(total, returned = items.len(), "Listed inquiries");
        Ok(Page::new(items, total, page))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: InquiryId) -> RepoResult<Option<Inquiry>> {
        let result = sqlx::query_as::<_, InquiryModel>(&format!(
            "SELECT {} FROM inquiries WHERE id = $1 AND deleted_at IS NULL",
            InquiryModel::COLUMNS
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Inquiry::try_from).transpose()
    }

    #[instrument(skip(self, inquiry), fields(category = %inquiry.category))]
    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        let row = sqlx::query_as::<_, InquiryModel>(&format!(
            r"
            INSERT INTO inquiries (name, email, phone, category, subject, message, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            ",
            InquiryModel::COLUMNS
        ))
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(inquiry.category.as_str())
        .bind(&inquiry.subject)
        .bind(&inquiry.message)
        .bind(inquiry.priority.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Inquiry::try_from(row)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: InquiryId,
        changes: InquiryChanges,
    ) -> RepoResult<(Inquiry, StatusTransition)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let current = sqlx::query_as::<_, InquiryModel>(&format!(
            "SELECT {} FROM inquiries WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
            InquiryModel::COLUMNS
        ))
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Dropping the transaction rolls it back
        let Some(current) = current else {
            return Err(inquiry_not_found(id));
        };

        let mut inquiry = Inquiry::try_from(current)?;
        if changes.is_empty() {
            tx.commit().await.map_err(map_db_error)?;
            let transition = StatusTransition {
                previous: inquiry.status,
                current: inquiry.status,
                resolved_stamped: false,
            };
            return Ok((inquiry, transition));
        }

        let transition = inquiry.apply_changes(changes, Utc::now());
        let write = InquiryWrite::new(&inquiry);

        let row = sqlx::query_as::<_, InquiryModel>(&format!(
            r"
            UPDATE inquiries
            SET name = $2, email = $3, phone = $4, category = $5, subject = $6, message = $7,
                status = $8, priority = $9, resolution_notes = $10, resolved_at = $11,
                updated_at = $12
            WHERE id = $1
            RETURNING {}
            ",
            InquiryModel::COLUMNS
        ))
        .bind(write.id)
        .bind(write.name)
        .bind(write.email)
        .bind(write.phone)
        .bind(write.category)
        .bind(write.subject)
        .bind(write.message)
        .bind(write.status)
        .bind(write.priority)
        .bind(write.resolution_notes)
        .bind(inquiry.resolved_at)
        .bind(inquiry.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((Inquiry::try_from(row)?, transition))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: InquiryId) -> RepoResult<Inquiry> {
        let row = sqlx::query_as::<_, InquiryModel>(&format!(
            r"
            UPDATE inquiries
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {}
            ",
            InquiryModel::COLUMNS
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            Some(row) => Inquiry::try_from(row),
            None => Err(inquiry_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by(&self, dimension: CountDimension) -> RepoResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, GroupCountModel>(&format!(
            r"
            SELECT {column} AS value, COUNT(*) AS count
            FROM inquiries
            WHERE deleted_at IS NULL
            GROUP BY {column}
            ",
            column = dimension.column()
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|row| (row.value, row.count)).collect())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
