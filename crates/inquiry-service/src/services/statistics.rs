//! Statistics service
//!
//! Aggregate counts over non-deleted inquiries.

use std::str::FromStr;

use inquiry_core::traits::CountDimension;
use inquiry_core::value_objects::{Category, InquiryStatus, Priority};
use tracing::{error, instrument, warn};

use crate::dto::StatisticsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Statistics service
pub struct StatisticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatisticsService<'a> {
    /// Create a new StatisticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Total plus per-status, per-category, and per-priority counts
    ///
    /// Values with no inquiries report zero.
    #[instrument(skip(self))]
    pub async fn get_statistics(&self) -> ServiceResult<StatisticsResponse> {
        self.collect()
            .await
            .inspect_err(|err| error!(error = %err, "Error fetching inquiry statistics"))
    }

    async fn collect(&self) -> ServiceResult<StatisticsResponse> {
        let repo = self.ctx.inquiry_repo();
        let mut stats = StatisticsResponse {
            total: repo.count_all().await?,
            ..Default::default()
        };

        for (value, count) in self.counts(CountDimension::Status).await? {
            match InquiryStatus::from_str(&value) {
                Ok(status) => stats.by_status.record(status, count),
                Err(err) => warn!(%err, count, "Ignoring unknown status in statistics"),
            }
        }
        for (value, count) in self.counts(CountDimension::Category).await? {
            match Category::from_str(&value) {
                Ok(category) => stats.by_category.record(category, count),
                Err(err) => warn!(%err, count, "Ignoring unknown category in statistics"),
            }
        }
        for (value, count) in self.counts(CountDimension::Priority).await? {
            match Priority::from_str(&value) {
                Ok(priority) => stats.by_priority.record(priority, count),
                Err(err) => warn!(%err, count, "Ignoring unknown priority in statistics"),
            }
        }

        Ok(stats)
    }

    async fn counts(&self, dimension: CountDimension) -> ServiceResult<Vec<(String, i64)>> {
        self.ctx
            .inquiry_repo()
            .count_by(dimension)
            .await
            .map_err(ServiceError::from)
    }
}
