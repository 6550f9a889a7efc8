//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! 現在、ドメインモデル（`Room`）を直接ストレージとして使用しています。
//! 将来 PostgreSQL などの DBMS を実装する際は、以下の変換層が必要になります：
//!
//! ```text
//! DB Row → RoomRow (DTO) → Room (ドメインモデル)
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Room, RoomId, RoomRepository, Timestamp};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRepository {
    /// 空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期ルーム（ピン留めルームなど）を持つ InMemoryRoomRepository を作成
    ///
    /// ID が重複する場合は後のルームで上書きされます。
    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let rooms = rooms
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect();
        Self {
            rooms: Mutex::new(rooms),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(&self, room: Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(&room.id) {
            return Err(RepositoryError::RoomAlreadyExists(
                room.id.as_str().to_string(),
            ));
        }
        rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.get(room_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.values().cloned().collect())
    }

    async fn remove_expired(&self, now: Timestamp) -> Result<usize, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let before = rooms.len();
        rooms.retain(|_, room| !room.is_expired(now));
        Ok(before - rooms.len())
    }
}
