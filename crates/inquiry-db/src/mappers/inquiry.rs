//! Inquiry entity <-> model mapper

use inquiry_core::entities::Inquiry;
use inquiry_core::error::DomainError;
use inquiry_core::value_objects::InquiryId;

use crate::models::InquiryModel;

/// Convert an InquiryModel row to an Inquiry entity
///
/// Fails only if an enum column holds a value outside the CHECK constraint.
impl TryFrom<InquiryModel> for Inquiry {
    type Error = DomainError;

    fn try_from(model: InquiryModel) -> Result<Self, Self::Error> {
        let corrupt =
            |err: inquiry_core::InvalidValue| DomainError::DatabaseError(format!("inquiry {}: {err}", model.id));

        Ok(Inquiry {
            id: InquiryId::new(model.id),
            category: model.category.parse().map_err(corrupt)?,
            status: model.status.parse().map_err(corrupt)?,
            priority: model.priority.parse().map_err(corrupt)?,
            name: model.name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            resolved_at: model.resolved_at,
            resolution_notes: model.resolution_notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}

/// Column values for writing an updated Inquiry back to the database
pub struct InquiryWrite<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub category: &'static str,
    pub subject: &'a str,
    pub message: &'a str,
    pub status: &'static str,
    pub priority: &'static str,
    pub resolution_notes: Option<&'a str>,
}

impl<'a> InquiryWrite<'a> {
    pub fn new(inquiry: &'a Inquiry) -> Self {
        Self {
            id: inquiry.id.into_inner(),
            name: &inquiry.name,
            email: &inquiry.email,
            phone: inquiry.phone.as_deref(),
            category: inquiry.category.as_str(),
            subject: &inquiry.subject,
            message: &inquiry.message,
            status: inquiry.status.as_str(),
            priority: inquiry.priority.as_str(),
            resolution_notes: inquiry.resolution_notes.as_deref(),
        }
    }
}
