//! Repository trait 定義
//!
//! ドメイン層がデータアクセスの抽象を定義し、インフラ層が実装します（依存性の逆転）。

use async_trait::async_trait;

use super::{Client, ClientId, RepositoryError, Room, RoomId, Timestamp};

/// Room の永続化を抽象化する Repository
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ルームを追加する。同じ ID のルームが存在する場合は `RoomAlreadyExists`
    async fn insert(&self, room: Room) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError>;

    /// 全ルームを取得する（順序は未定義）
    async fn list(&self) -> Result<Vec<Room>, RepositoryError>;

    /// `now` 時点で期限切れのルームを削除し、削除件数を返す
    async fn remove_expired(&self, now: Timestamp) -> Result<usize, RepositoryError>;
}

/// Client の永続化を抽象化する Repository
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// クライアントを登録する。同じ ID が存在する場合は `ClientAlreadyExists`
    async fn insert(&self, client: Client) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, client_id: &ClientId) -> Result<Option<Client>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;
}
