//! Extractors that deserialize and validate request input before a handler
//! body runs. A rejected request never reaches the document store.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};

use crate::{errors::ValidationError, models::Validate};

/// JSON body validated into `T`
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T::Payload>::from_request(req, state).await?;
        Ok(ValidJson(T::validate(payload)?))
    }
}

/// Query string validated into `T`
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T::Payload>::from_request_parts(parts, state).await?;
        Ok(ValidQuery(T::validate(params)?))
    }
}
