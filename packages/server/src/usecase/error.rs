//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// クライアント登録・参照のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// ユーザー名が不正
    #[error("invalid username: {0}")]
    InvalidUsername(ValueObjectError),

    /// クライアントが存在しない
    #[error("client not found: {0}")]
    NotFound(String),

    /// 生成した ID が検証に失敗した
    #[error("failed to generate client id: {0}")]
    IdGeneration(ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ルーム作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// x-client-id が未登録のクライアントを指している
    #[error("unknown client: {0}")]
    UnknownClient(String),

    /// ルーム名が不正
    #[error("invalid room name: {0}")]
    InvalidName(ValueObjectError),

    /// 指定されたルーム ID が不正
    #[error("invalid room id: {0}")]
    InvalidId(ValueObjectError),

    /// 作成者がすでに有効なルームを持っている
    #[error("client {client_id} already has an active room: {room_id}")]
    AlreadyHasActiveRoom { client_id: String, room_id: String },

    /// ルーム数が上限に達している
    #[error("maximum number of rooms reached ({max})")]
    RoomLimitReached { max: usize },

    /// 指定されたルーム ID がすでに使われている
    #[error("room id already taken: {0}")]
    RoomIdTaken(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CreateRoomError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RoomAlreadyExists(id) => CreateRoomError::RoomIdTaken(id),
            other => CreateRoomError::Repository(other),
        }
    }
}

/// ルーム参照のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomQueryError {
    /// ルームが存在しない（期限切れを含む）
    #[error("room not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
