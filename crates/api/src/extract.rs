//! Request body extractor that runs `validator` rules after deserializing.

use axum::extract::{FromRequest, Request};
use axum::Json;
use pessoas_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that has passed its [`Validate`] rules.
///
/// Rejects malformed JSON with [`AppError::BadRequest`] and rule failures
/// with [`CoreError::Validation`], both rendered as 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;

        Ok(Self(value))
    }
}

/// Flatten field errors into `field: message` pairs, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use pessoas_core::person::PersonDto;

    use super::*;

    #[test]
    fn describe_lists_every_failing_field() {
        let dto = PersonDto {
            id: None,
            name: " ".into(),
            national_id: "1".into(),
            age: 0,
        };
        let described = describe(&dto.validate().unwrap_err());
        let age = described.find("age must be between 1 and 105").unwrap();
        let name = described.find("name must not be blank").unwrap();
        assert!(age < name, "fields should be sorted: {described}");
        assert!(!described.contains("national id"));
    }
}
