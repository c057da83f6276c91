//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Deserialization failures (missing required fields, malformed JSON)
/// surface as 400 bad-request; constraint violations surface as 400
/// with the joined violation messages.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use user_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct Payload {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn handler(ValidatedJson(payload): ValidatedJson<Payload>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
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
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(serde::Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Firstname cannot be empty"))]
        firstname: String,
        #[validate(email(message = "Email must be a valid email address"))]
        email: String,
    }

    #[test]
    fn collects_one_message_per_violation() {
        let probe = Probe {
            firstname: String::new(),
            email: "maria.musterfrau".to_string(),
        };

        let errors = probe.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("Firstname cannot be empty"));
        assert!(message.contains("Email must be a valid email address"));
    }

    #[test]
    fn valid_payload_produces_no_errors() {
        let probe = Probe {
            firstname: "Max".to_string(),
            email: "max.mustermann@example.com".to_string(),
        };

        assert!(probe.validate().is_ok());
    }
}
