//! UseCase: ルーム作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - 作成者の確認、入力検証（不適切なルーム名を含む）、1 クライアント 1 ルーム制限、ルーム数上限、ID 重複
//!
//! ### どのような状況を想定しているか
//! - 正常系：ID 指定なし（サーバー採番）、ID 指定あり
//! - 異常系：未登録クライアント、空の ID 指定、不適切なルーム名、有効なルームの重複作成、上限超過、ID 重複
//! - エッジケース：期限切れのルームは制限の対象外、同時に実行された作成リクエスト

use std::sync::Arc;

use tokio::sync::Mutex;
use tsudoi_shared::time::get_jst_timestamp;

use crate::domain::{
    ClientId, ClientRepository, NameFilter, Room, RoomId, RoomIdFactory, RoomName, RoomRepository,
    Timestamp,
};

use super::error::CreateRoomError;

/// Default maximum number of community rooms
pub const DEFAULT_MAX_ROOMS: usize = 20;

/// Default lifetime of a community room (1 hour)
pub const DEFAULT_ROOM_TTL_MILLIS: i64 = 60 * 60 * 1000;

/// Limits applied when clients create rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPolicy {
    /// Maximum number of live community rooms (pinned rooms are not counted)
    pub max_rooms: usize,
    /// Lifetime of a community room
    pub room_ttl_millis: i64,
    /// Block list applied to room names
    pub name_filter: NameFilter,
}

impl Default for RoomPolicy {
    fn default() -> Self {
        Self {
            max_rooms: DEFAULT_MAX_ROOMS,
            room_ttl_millis: DEFAULT_ROOM_TTL_MILLIS,
            name_filter: NameFilter::default(),
        }
    }
}

/// ルーム作成のユースケース
///
/// 制限の確認から保存までを `creation_lock` で直列化するため、同じロックを
/// 共有するユースケース同士では同時実行しても制限を超えない。
pub struct CreateRoomUseCase {
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRepository>,
    policy: RoomPolicy,
    creation_lock: Arc<Mutex<()>>,
}

impl CreateRoomUseCase {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        clients: Arc<dyn ClientRepository>,
        policy: RoomPolicy,
        creation_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            rooms,
            clients,
            policy,
            creation_lock,
        }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `owner_id` - 作成者のクライアント ID（x-client-id ヘッダーの値）
    /// * `proposed_id` - 作成者が指定したルーム ID（`None` ならサーバーが採番）
    /// * `name` - ルーム名
    pub async fn execute(
        &self,
        owner_id: String,
        proposed_id: Option<String>,
        name: String,
    ) -> Result<Room, CreateRoomError> {
        // 1. 作成者が登録済みであることを確認
        let owner = self.find_owner(owner_id).await?;

        // 2. 入力検証（空文字の ID 指定は省略とは区別してエラーにする）
        let name = RoomName::new(name).map_err(CreateRoomError::InvalidName)?;
        self.policy
            .name_filter
            .check(&name)
            .map_err(CreateRoomError::InvalidName)?;
        let room_id = match proposed_id {
            Some(id) => RoomId::new(id).map_err(CreateRoomError::InvalidId)?,
            None => RoomIdFactory::generate().map_err(CreateRoomError::InvalidId)?,
        };

        // 3. 期限切れのルームを掃除してから制限を確認（保存までロックを保持）
        let _guard = self.creation_lock.lock().await;
        let now = Timestamp::new(get_jst_timestamp());
        let removed = self.rooms.remove_expired(now).await?;
        if removed > 0 {
            tracing::debug!("Removed {} expired room(s)", removed);
        }

        let rooms = self.rooms.list().await?;
        if let Some(active) = rooms.iter().find(|room| room.is_owned_by(&owner)) {
            return Err(CreateRoomError::AlreadyHasActiveRoom {
                client_id: owner.as_str().to_string(),
                room_id: active.id.as_str().to_string(),
            });
        }

        let community_rooms = rooms.iter().filter(|room| !room.is_pinned).count();
        if community_rooms >= self.policy.max_rooms {
            return Err(CreateRoomError::RoomLimitReached {
                max: self.policy.max_rooms,
            });
        }

        // 4. 保存（ID 重複は Repository が検出する）
        let room = Room::new(room_id, name, owner, now, self.policy.room_ttl_millis);
        self.rooms.insert(room.clone()).await?;

        tracing::info!(
            "Room '{}' ({}) created by '{}'",
            room.name,
            room.id,
            room.owner.as_ref().map(ClientId::as_str).unwrap_or_default()
        );
        Ok(room)
    }

    async fn find_owner(&self, owner_id: String) -> Result<ClientId, CreateRoomError> {
        let Ok(id) = ClientId::new(owner_id.clone()) else {
            return Err(CreateRoomError::UnknownClient(owner_id));
        };
        match self.clients.find_by_id(&id).await? {
            Some(client) => Ok(client.id),
            None => Err(CreateRoomError::UnknownClient(owner_id)),
        }
    }
}
