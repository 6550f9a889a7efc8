//! UseCase: ルーム一覧・詳細取得
//!
//! 期限切れのルームは一覧にも詳細にも現れません。

use std::{cmp::Ordering, sync::Arc};

use tsudoi_shared::time::get_jst_timestamp;

use crate::domain::{Room, RoomId, RoomRepository, Timestamp};

use super::error::RoomQueryError;

/// ルーム一覧のユースケース
pub struct ListRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ListRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 期限切れのルームを削除し、ピン留めルーム → 新しいコミュニティルームの順で返す
    pub async fn execute(&self) -> Result<Vec<Room>, RoomQueryError> {
        let now = Timestamp::new(get_jst_timestamp());
        let removed = self.repository.remove_expired(now).await?;
        if removed > 0 {
            tracing::debug!("Removed {} expired room(s)", removed);
        }

        let mut rooms = self.repository.list().await?;
        rooms.sort_by(display_order);
        Ok(rooms)
    }
}

fn display_order(a: &Room, b: &Room) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| {
            if a.is_pinned {
                a.name.as_str().cmp(b.name.as_str())
            } else {
                b.created_at.cmp(&a.created_at)
            }
        })
        .then_with(|| a.id.as_str().cmp(b.id.as_str()))
}

/// ルーム詳細取得のユースケース
pub struct GetRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, room_id: String) -> Result<Room, RoomQueryError> {
        let Ok(id) = RoomId::new(room_id.clone()) else {
            return Err(RoomQueryError::NotFound(room_id));
        };
        let now = Timestamp::new(get_jst_timestamp());
        match self.repository.find_by_id(&id).await? {
            Some(room) if !room.is_expired(now) => Ok(room),
            _ => Err(RoomQueryError::NotFound(room_id)),
        }
    }
}
