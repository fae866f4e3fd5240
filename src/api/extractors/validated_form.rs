//! Validated form extractor - Combines form deserialization with validation.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies; both decode into the same target type.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form,
};
use serde::de::{value::MapDeserializer, DeserializeOwned};
use validator::Validate;

use crate::errors::AppError;

/// Form extractor that rejects malformed or invalid submissions before the
/// handler runs.
///
/// Missing or undecodable fields give `BadRequest`, rule violations give
/// `Validation`; both render as 400.
///
/// # Example
///
/// ```rust,ignore
/// async fn signup(ValidatedForm(form): ValidatedForm<SignupForm>) {
///     // form is already validated
/// }
/// ```
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_multipart(&req) {
            decode_multipart::<T, S>(req, state).await?
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            value
        };

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedForm(value))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Collect the named text parts and deserialize them like form fields.
async fn decode_multipart<T, S>(req: Request, state: &S) -> Result<T, AppError>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?;

    let mut fields: Vec<(String, String)> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        fields.push((name, value));
    }

    T::deserialize(MapDeserializer::<_, serde::de::value::Error>::new(
        fields.into_iter(),
    ))
    .map_err(|e| AppError::bad_request(format!("Failed to deserialize form body: {}", e)))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    // field_errors() is a HashMap; keep the page text stable
    messages.sort();
    messages.join(", ")
}
