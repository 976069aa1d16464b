//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use std::borrow::Cow;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use inquiry_service::{not_a_string, TextFields};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Extracts a JSON object body and validates it using the `validator` crate.
/// Fields holding the wrong JSON type are reported in the same error map as
/// rule failures, and replace any rule failure for that field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + TextFields,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::Rejected(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
            _ => ApiError::invalid_body("Invalid JSON body"),
        })?;

        let Value::Object(mut fields) = body else {
            return Err(ApiError::Rejected(
                "The request body must be a JSON object".to_string(),
            ));
        };

        let type_errors = screen_fields::<T>(&mut fields);

        let value: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ApiError::Rejected(e.to_string()))?;

        let mut errors = value.validate().err().unwrap_or_else(ValidationErrors::new);
        for (field, error) in type_errors {
            errors
                .errors_mut()
                .insert(Cow::Borrowed(field), ValidationErrorsKind::Field(vec![error]));
        }

        if errors.is_empty() {
            Ok(ValidatedJson(value))
        } else {
            Err(errors.into())
        }
    }
}

/// Remove fields that are not strings (or a disallowed `null`), returning an error for each
fn screen_fields<T: TextFields>(
    fields: &mut Map<String, Value>,
) -> Vec<(&'static str, ValidationError)> {
    let mut errors = Vec::new();

    for &field in T::FIELDS {
        let acceptable = match fields.get(field) {
            None | Some(Value::String(_)) => true,
            Some(Value::Null) => T::accepts_null(field),
            Some(_) => false,
        };
        if !acceptable {
            fields.remove(field);
            errors.push((field, not_a_string(field)));
        }
    }

    errors
}
