//! Inquiry entity - a customer question tracked through to resolution

use chrono::{DateTime, Utc};

use crate::value_objects::{Category, InquiryId, InquiryStatus, Priority};

/// Inquiry entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: Category,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub priority: Priority,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields accepted when an inquiry is submitted
///
/// Status always starts as pending and resolution fields start empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: Category,
    pub subject: String,
    pub message: String,
    pub priority: Priority,
}

impl NewInquiry {
    /// Materialize the entity once the store has assigned an id
    pub fn into_inquiry(self, id: InquiryId, now: DateTime<Utc>) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            category: self.category,
            subject: self.subject,
            message: self.message,
            status: InquiryStatus::default(),
            priority: self.priority,
            resolved_at: None,
            resolution_notes: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Partial update of an inquiry
///
/// `None` leaves a field untouched. For the nullable columns, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub category: Option<Category>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: Option<InquiryStatus>,
    pub priority: Option<Priority>,
    pub resolution_notes: Option<Option<String>>,
}

impl InquiryChanges {
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Names of the fields this change set touches
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.phone.is_some() {
            fields.push("phone");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        if self.subject.is_some() {
            fields.push("subject");
        }
        if self.message.is_some() {
            fields.push("message");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.resolution_notes.is_some() {
            fields.push("resolution_notes");
        }
        fields
    }
}

/// Outcome of applying a change set, as far as the status workflow is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub previous: InquiryStatus,
    pub current: InquiryStatus,
    /// Whether `resolved_at` was stamped by this update
    pub resolved_stamped: bool,
}

impl Inquiry {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.status == InquiryStatus::Resolved
    }

    /// Apply a partial update in place.
    ///
    /// Moving into `resolved` from any other status stamps `resolved_at`.
    /// The stamp is never cleared, even if the status later regresses.
    /// An empty change set leaves `updated_at` alone.
    pub fn apply_changes(&mut self, changes: InquiryChanges, now: DateTime<Utc>) -> StatusTransition {
        let previous = self.status;
        let touched = !changes.is_empty();

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(message) = changes.message {
            self.message = message;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(notes) = changes.resolution_notes {
            self.resolution_notes = notes;
        }

        let mut resolved_stamped = false;
        if let Some(status) = changes.status {
            if status == InquiryStatus::Resolved && previous != InquiryStatus::Resolved {
                self.resolved_at = Some(now);
                resolved_stamped = true;
            }
            self.status = status;
        }

        if touched {
            self.updated_at = now;
        }

        StatusTransition {
            previous,
            current: self.status,
            resolved_stamped,
        }
    }
}
