//! Request extractors that validate input before any handler code runs.
//!
//! Both reject with [`AppError`] so malformed requests get the same JSON
//! error envelope as every other failure, and never reach the database.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use seriestrack_core::error::CoreError;
use seriestrack_core::series::parse_id;
use seriestrack_core::types::DbId;
use validator::Validate;

use crate::error::AppError;

/// Series id taken from the `{id}` path segment.
///
/// Non-integer ids are rejected as validation errors.
#[derive(Debug, Clone, Copy)]
pub struct SeriesId(pub DbId);

impl<S> FromRequestParts<S> for SeriesId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(SeriesId(parse_id(&raw)?))
    }
}

/// JSON body that has passed its `validator` rules.
///
/// A body that is missing, not JSON or the wrong shape is a validation
/// error, the same as one that fails a rule.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateSeries>) -> AppResult<...> { ... }
/// ```
#[derive(Debug)]
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
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
