//! Request validation extractor.
//!
//! Wraps `axum::Json` and runs `validator` rules after deserialization.
//! Malformed or undeserializable bodies map to 400; bodies that parse but
//! fail a validation rule map to 422 with the offending fields named.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!("{}", rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::LoginRequest;

    #[test]
    fn test_format_errors_names_invalid_field() {
        let dto = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "email is invalid");
    }

    #[test]
    fn test_format_errors_joins_multiple_fields() {
        let dto = LoginRequest {
            email: "not-an-email".to_string(),
            password: "".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let formatted = format_errors(&errors);
        assert!(formatted.contains("email is invalid"));
        assert!(formatted.contains("password is invalid"));
    }
}
