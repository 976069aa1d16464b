//! In-process implementation of InquiryRepository
//!
//! Mirrors the PostgreSQL semantics (soft delete, filtering, ordering with an
//! id tiebreaker) without a database. Used by the test suites and for running
//! the API locally.

use std::cmp::Ordering as CmpOrdering;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use inquiry_core::entities::{Inquiry, InquiryChanges, NewInquiry, StatusTransition};
use inquiry_core::traits::{
    CountDimension, InquiryFilter, InquiryRepository, Page, PageRequest, RepoResult,
};
use inquiry_core::value_objects::{InquiryId, SortField, SortOrder};

use super::error::{inquiry_not_found, store_unavailable};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    rows: BTreeMap<InquiryId, Inquiry>,
}

/// In-memory inquiry store
#[derive(Debug, Default)]
pub struct MemoryInquiryRepository {
    state: RwLock<MemoryState>,
    unavailable: AtomicBool,
}

impl MemoryInquiryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a database error (or recover)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Find an inquiry by ID whether or not it has been soft deleted
    pub fn find_including_deleted(&self, id: InquiryId) -> Option<Inquiry> {
        self.state.read().rows.get(&id).cloned()
    }

    /// Number of stored rows, soft-deleted ones included
    pub fn stored_len(&self) -> usize {
        self.state.read().rows.len()
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(store_unavailable())
        } else {
            Ok(())
        }
    }
}

fn compare(a: &Inquiry, b: &Inquiry, field: SortField) -> CmpOrdering {
    let primary = match field {
        SortField::Id => CmpOrdering::Equal,
        SortField::Name => a.name.cmp(&b.name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
        SortField::Subject => a.subject.cmp(&b.subject),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Priority => a.priority.as_str().cmp(b.priority.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl InquiryRepository for MemoryInquiryRepository {
    async fn list(&self, filter: &InquiryFilter, page: PageRequest) -> RepoResult<Page<Inquiry>> {
        self.check_available()?;
        let state = self.state.read();

        let mut matching: Vec<&Inquiry> = state
            .rows
            .values()
            .filter(|inquiry| filter.matches(inquiry))
            .collect();
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, filter.sort.field);
            match filter.sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, total, page))
    }

    async fn find_by_id(&self, id: InquiryId) -> RepoResult<Option<Inquiry>> {
        self.check_available()?;
        Ok(self
            .state
            .read()
            .rows
            .get(&id)
            .filter(|inquiry| !inquiry.is_deleted())
            .cloned())
    }

    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        self.check_available()?;
        let mut state = self.state.write();
        state.last_id += 1;
        let id = InquiryId::new(state.last_id);
        let created = inquiry.clone().into_inquiry(id, Utc::now());
        state.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: InquiryId,
        changes: InquiryChanges,
    ) -> RepoResult<(Inquiry, StatusTransition)> {
        self.check_available()?;
        let mut state = self.state.write();
        let inquiry = state
            .rows
            .get_mut(&id)
            .filter(|inquiry| !inquiry.is_deleted())
            .ok_or_else(|| inquiry_not_found(id))?;

        let transition = inquiry.apply_changes(changes, Utc::now());
        Ok((inquiry.clone(), transition))
    }

    async fn soft_delete(&self, id: InquiryId) -> RepoResult<Inquiry> {
        self.check_available()?;
        let mut state = self.state.write();
        let inquiry = state
            .rows
            .get_mut(&id)
            .filter(|inquiry| !inquiry.is_deleted())
            .ok_or_else(|| inquiry_not_found(id))?;

        inquiry.deleted_at = Some(Utc::now());
        Ok(inquiry.clone())
    }

    async fn count_all(&self) -> RepoResult<i64> {
        self.check_available()?;
        let state = self.state.read();
        Ok(state.rows.values().filter(|i| !i.is_deleted()).count() as i64)
    }

    async fn count_by(&self, dimension: CountDimension) -> RepoResult<Vec<(String, i64)>> {
        self.check_available()?;
        let state = self.state.read();
        let mut counts: HashMap<&'static str, i64> = HashMap::new();
        for inquiry in state.rows.values().filter(|i| !i.is_deleted()) {
            *counts.entry(dimension.value_of(inquiry)).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect())
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}
