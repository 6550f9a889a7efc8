//! Request payload decoding.
//!
//! Wraps `serde_json` so that a failed decode reports which request shape
//! was being decoded and which field was missing or had the wrong type.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A request DTO that can be decoded from a JSON body.
pub trait WireShape: DeserializeOwned {
    /// Shape name reported in decode errors
    const SHAPE: &'static str;

    /// Keys that must be present in the payload
    const REQUIRED: &'static [&'static str];
}

/// Per-request decode/validation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required key is absent from the payload
    #[error("{shape}: missing required field `{field}`")]
    MissingField { shape: &'static str, field: String },

    /// A value has the wrong JSON type. `field` is `None` when the payload
    /// itself has the wrong shape (e.g. a string instead of an object).
    #[error("{shape}: invalid field value: {message}")]
    InvalidField {
        shape: &'static str,
        field: Option<String>,
        message: String,
    },

    /// The body is not well-formed JSON
    #[error("{shape}: malformed JSON: {message}")]
    Syntax { shape: &'static str, message: String },
}

impl DecodeError {
    /// Shape that failed to decode
    pub fn shape(&self) -> &'static str {
        match self {
            DecodeError::MissingField { shape, .. }
            | DecodeError::InvalidField { shape, .. }
            | DecodeError::Syntax { shape, .. } => shape,
        }
    }

    /// Offending field, when it is known
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField { field, .. } => Some(field),
            DecodeError::InvalidField { field, .. } => field.as_deref(),
            DecodeError::Syntax { .. } => None,
        }
    }
}

/// Decode a request shape from a JSON body.
///
/// Unknown keys are ignored. An optional key given as `null` decodes the
/// same as an absent key.
pub fn decode<T: WireShape>(body: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| DecodeError::Syntax {
        shape: T::SHAPE,
        message: err.to_string(),
    })?;

    if let Value::Object(map) = &value
        && let Some(field) = T::REQUIRED.iter().find(|key| !map.contains_key(**key))
    {
        return Err(DecodeError::MissingField {
            shape: T::SHAPE,
            field: field.to_string(),
        });
    }

    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        DecodeError::InvalidField {
            shape: T::SHAPE,
            field: (path != ".").then_some(path),
            message: err.into_inner().to_string(),
        }
    })
}
