//! JSON body extractor with a structured rejection.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] as a request extractor.
///
/// Every [`JsonRejection`](axum::extract::rejection::JsonRejection), including
/// a missing `Content-Type` header, becomes a 400 with an `INVALID_JSON` body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection).into_response())?;

        Ok(JsonBody(data))
    }
}
