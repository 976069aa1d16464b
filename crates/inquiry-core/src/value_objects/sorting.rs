//! Sort options for inquiry listings
//!
//! Sort input arrives as free text from the query string. Only a fixed set of
//! columns is sortable; anything else falls back to newest-first.

use std::fmt;

/// Column an inquiry listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Id,
    Name,
    Email,
    Category,
    Subject,
    Status,
    Priority,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Category,
        Self::Subject,
        Self::Status,
        Self::Priority,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Column name; safe to splice into SQL
    #[inline]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Category => "category",
            Self::Subject => "subject",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Resolve a raw `sort_by` parameter, falling back to `created_at`
    pub fn parse_or_default(input: Option<&str>) -> Self {
        input
            .map(str::trim)
            .and_then(|raw| Self::ALL.into_iter().find(|field| field.column() == raw))
            .unwrap_or_default()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[inline]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Resolve a raw `sort_order` parameter (case-insensitive), falling back to descending
    pub fn parse_or_default(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some(raw) if raw.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Field and direction together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            field: SortField::parse_or_default(sort_by),
            order: SortOrder::parse_or_default(sort_order),
        }
    }
}
