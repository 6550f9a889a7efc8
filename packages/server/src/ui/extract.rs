//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};

use crate::infrastructure::dto::{WireShape, decode};

use super::error::HttpError;

/// Header carrying the id of the registered client making the request
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// JSON body decoded with [`decode`], so decode failures name the shape and field.
#[derive(Debug)]
pub struct WireJson<T>(pub T);

impl<S, T> FromRequest<S> for WireJson<T>
where
    T: WireShape + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text(), None))?;
        Ok(Self(decode::<T>(&body)?))
    }
}

/// Id of the calling client, taken from the `x-client-id` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .ok_or_else(|| HttpError::Unauthorized(format!("missing {CLIENT_ID_HEADER} header")))?;
        let id = value
            .to_str()
            .map_err(|_| HttpError::Unauthorized(format!("invalid {CLIENT_ID_HEADER} header")))?;
        Ok(Self(id.trim().to_string()))
    }
}
