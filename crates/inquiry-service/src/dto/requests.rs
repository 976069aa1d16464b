//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Strings are trimmed while deserializing, and blank optional strings
//! arrive as absent.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use inquiry_core::entities::{InquiryChanges, NewInquiry};
use inquiry_core::value_objects::{Category, InquiryStatus, Priority};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Input normalization
// ============================================================================

/// Trim, turning blank strings into `None`
fn trimmed_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Trim, keeping blank strings so validation can reject them
fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}

/// Present-but-null (or blank) becomes `Some(None)`; only runs when the key is present
fn nullable_trimmed<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    trimmed_or_none(deserializer).map(Some)
}

// ============================================================================
// Enumerated field rules
// ============================================================================

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    Category::from_str(category).map(|_| ()).map_err(|_| {
        invalid(
            "in",
            format!(
                "The selected category is invalid. Valid categories are: {}",
                Category::allowed_values()
            ),
        )
    })
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    InquiryStatus::from_str(status).map(|_| ()).map_err(|_| {
        invalid(
            "in",
            format!(
                "The selected status is invalid. Valid statuses are: {}",
                InquiryStatus::allowed_values()
            ),
        )
    })
}

fn validate_new_priority(priority: &str) -> Result<(), ValidationError> {
    Priority::from_str(priority)
        .map(|_| ())
        .map_err(|_| invalid("in", "The selected priority is invalid.".to_string()))
}

fn validate_priority(priority: &str) -> Result<(), ValidationError> {
    Priority::from_str(priority).map(|_| ()).map_err(|_| {
        invalid(
            "in",
            format!(
                "The selected priority is invalid. Valid priorities are: {}",
                Priority::allowed_values()
            ),
        )
    })
}

fn required(value: Option<String>, field: &str) -> ServiceResult<String> {
    value.ok_or_else(|| ServiceError::validation(format!("{field} is required")))
}

fn parse_field<T: FromStr>(value: &str) -> ServiceResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ServiceError::validation(e.to_string()))
}

// ============================================================================
// Field types
// ============================================================================

/// Request bodies made up of string fields
///
/// The boundary checks each field's JSON type against these tables before
/// deserializing, so a wrongly typed value is reported under its own field
/// together with every other rule failure.
pub trait TextFields {
    /// Fields that must be strings when present
    const FIELDS: &'static [&'static str];
    /// Fields that also accept `null`
    const NULLABLE: &'static [&'static str];

    /// Whether `field` may be sent as `null`
    fn accepts_null(field: &str) -> bool {
        Self::NULLABLE.contains(&field)
    }
}

/// Error reported for a field that is not a string, or is a disallowed `null`
pub fn not_a_string(field: &str) -> ValidationError {
    invalid(
        "string",
        format!("The {} must be a string.", field.replace('_', " ")),
    )
}

// ============================================================================
// Inquiry Requests
// ============================================================================

/// Submit inquiry request
///
/// Required fields are `Option` so a missing field reports the same
/// per-field message as a blank one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInquiryRequest {
    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(
        required(message = "Please provide your name."),
        length(max = 255, message = "The full name must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(
        required(message = "Please provide your email address."),
        email(message = "Please provide a valid email address."),
        length(max = 255, message = "The email address must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(length(max = 20, message = "The phone number must not be greater than 20 characters."))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(
        required(message = "Please select an inquiry category."),
        custom(function = "validate_category")
    )]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(
        required(message = "Please provide a subject for your inquiry."),
        length(max = 255, message = "The inquiry subject must not be greater than 255 characters.")
    )]
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(
        required(message = "Please provide a message describing your inquiry."),
        length(min = 10, message = "The message must be at least 10 characters long.")
    )]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "trimmed_or_none")]
    #[validate(custom(function = "validate_new_priority"))]
    pub priority: Option<String>,
}

/// `null` on a required field reads as missing, so every field accepts it
impl TextFields for CreateInquiryRequest {
    const FIELDS: &'static [&'static str] = &[
        "name", "email", "phone", "category", "subject", "message", "priority",
    ];
    const NULLABLE: &'static [&'static str] = Self::FIELDS;
}

impl CreateInquiryRequest {
    /// Convert a validated request into the domain input
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required field is missing or an
    /// enumerated field is out of range, i.e. the request skipped validation.
    pub fn into_new_inquiry(self) -> ServiceResult<NewInquiry> {
        let category = parse_field::<Category>(&required(self.category, "category")?)?;
        let priority = match self.priority {
            Some(priority) => parse_field::<Priority>(&priority)?,
            None => Priority::default(),
        };

        Ok(NewInquiry {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: self.phone,
            category,
            subject: required(self.subject, "subject")?,
            message: required(self.message, "message")?,
            priority,
        })
    }
}

/// Partial inquiry update request
///
/// Absent fields are left untouched. `phone` and `resolution_notes` may be
/// sent as `null` (or blank) to clear them; `null` elsewhere is rejected at
/// the boundary (see [`TextFields`]).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInquiryRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The full name must be between 1 and 255 characters."
    ))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        email(message = "Please provide a valid email address."),
        length(max = 255, message = "The email address must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "nullable_trimmed")]
    #[validate(length(max = 20, message = "The phone number must not be greater than 20 characters."))]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The inquiry subject must be between 1 and 255 characters."
    ))]
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 10, message = "The message must be at least 10 characters long."))]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "nullable_trimmed")]
    pub resolution_notes: Option<Option<String>>,
}

/// Only `phone` and `resolution_notes` can be cleared with `null`
impl TextFields for UpdateInquiryRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "category",
        "subject",
        "message",
        "status",
        "priority",
        "resolution_notes",
    ];
    const NULLABLE: &'static [&'static str] = &["phone", "resolution_notes"];
}

impl UpdateInquiryRequest {
    /// Convert a validated request into a domain change set
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if an enumerated field is out of range.
    pub fn into_changes(self) -> ServiceResult<InquiryChanges> {
        Ok(InquiryChanges {
            name: self.name,
            email: self.email,
            phone: self.phone,
            category: self.category.as_deref().map(parse_field).transpose()?,
            subject: self.subject,
            message: self.message,
            status: self.status.as_deref().map(parse_field).transpose()?,
            priority: self.priority.as_deref().map(parse_field).transpose()?,
            resolution_notes: self.resolution_notes,
        })
    }
}
