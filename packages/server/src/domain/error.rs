//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ClientId validation error
    #[error("ClientId cannot be empty")]
    ClientIdEmpty,

    /// ClientId too long error
    #[error("ClientId cannot exceed {max} characters (got {actual})")]
    ClientIdTooLong { max: usize, actual: usize },

    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// RoomId too long error
    #[error("RoomId cannot exceed {max} characters (got {actual})")]
    RoomIdTooLong { max: usize, actual: usize },

    /// RoomId contains a character outside `[A-Za-z0-9_-]`
    #[error("RoomId may only contain ASCII letters, digits, '-' and '_' (got: {0})")]
    RoomIdInvalidFormat(String),

    /// RoomName validation error
    #[error("Room name cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("Room name cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    /// RoomName contains a blocked word
    #[error("Room name contains inappropriate content")]
    RoomNameInappropriate,

    /// Username validation error
    #[error("Username cannot be empty")]
    UsernameEmpty,

    /// Username too long error
    #[error("Username cannot exceed {max} characters (got {actual})")]
    UsernameTooLong { max: usize, actual: usize },
}

/// Errors returned by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A room with the same id is already stored
    #[error("Room already exists: {0}")]
    RoomAlreadyExists(String),

    /// A client with the same id is already stored
    #[error("Client already exists: {0}")]
    ClientAlreadyExists(String),

    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(String),
}
