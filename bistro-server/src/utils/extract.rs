//! Request extractors

use axum::extract::{FromRequest, Request};
use axum::Form;
use serde::de::DeserializeOwned;

use crate::utils::{AppError, AppResult, ErrorCode};

/// `application/x-www-form-urlencoded` body whose rejection is an [`AppError`]
///
/// Missing fields, non-numeric identifiers and a wrong content type all
/// surface as `InvalidFormat` (400) in the standard error envelope.
#[derive(Debug, Clone)]
pub struct FormInput<T>(pub T);

impl<S, T> FromRequest<S> for FormInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(FormInput(value)),
            Err(rejection) => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                rejection.body_text(),
            )),
        }
    }
}

/// Parse a `key=value` path segment such as `backWorkerID=5`
pub fn parse_selector(segment: &str, key: &str) -> AppResult<i64> {
    let invalid = || {
        AppError::invalid_request(format!("Expected '{key}=<id>', got '{segment}'"))
            .with_detail("segment", segment)
    };

    let value = segment
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(invalid)?;
    value.trim().parse::<i64>().map_err(|_| invalid())
}
