//! HTTP error responses.
//!
//! Every error is rendered as `{"error": "...", "status": 400}` with an
//! optional `field` naming the offending request field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    infrastructure::dto::DecodeError,
    usecase::{ClientError, CreateRoomError, RoomQueryError},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Malformed or invalid request payload
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        field: Option<String>,
    },

    /// Caller is missing or not a registered client
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A capacity limit was hit
    #[error("Too many requests: {0}")]
    TooManyRequests(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>, field: Option<&str>) -> Self {
        HttpError::BadRequest {
            message: message.into(),
            field: field.map(str::to_string),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let (message, field) = match self {
            HttpError::BadRequest { message, field } => (message, field),
            HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::TooManyRequests(msg)
            | HttpError::Internal(msg) => (msg, None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

impl From<DecodeError> for HttpError {
    fn from(err: DecodeError) -> Self {
        let field = err.field().map(str::to_string);
        HttpError::BadRequest {
            message: err.to_string(),
            field,
        }
    }
}

impl From<ClientError> for HttpError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUsername(_) => HttpError::bad_request(err.to_string(), Some("username")),
            ClientError::NotFound(_) => HttpError::NotFound(err.to_string()),
            ClientError::IdGeneration(_) | ClientError::Repository(_) => {
                HttpError::Internal(err.to_string())
            }
        }
    }
}

impl From<CreateRoomError> for HttpError {
    fn from(err: CreateRoomError) -> Self {
        match err {
            CreateRoomError::UnknownClient(_) => HttpError::Unauthorized(err.to_string()),
            CreateRoomError::InvalidName(_) => HttpError::bad_request(err.to_string(), Some("name")),
            CreateRoomError::InvalidId(_) => HttpError::bad_request(err.to_string(), Some("id")),
            CreateRoomError::AlreadyHasActiveRoom { .. } | CreateRoomError::RoomIdTaken(_) => {
                HttpError::Conflict(err.to_string())
            }
            CreateRoomError::RoomLimitReached { .. } => HttpError::TooManyRequests(err.to_string()),
            CreateRoomError::Repository(_) => HttpError::Internal(err.to_string()),
        }
    }
}

impl From<RoomQueryError> for HttpError {
    fn from(err: RoomQueryError) -> Self {
        match err {
            RoomQueryError::NotFound(_) => HttpError::NotFound(err.to_string()),
            RoomQueryError::Repository(_) => HttpError::Internal(err.to_string()),
        }
    }
}
