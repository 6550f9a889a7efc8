//! Core domain models for the chat room directory.

use serde::{Deserialize, Serialize};

use super::value_object::{ClientId, RoomId, RoomName, Timestamp, Username};

/// Discussion topic attached to a pinned room.
///
/// A topic is present or absent as a whole; there is no partially-set topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Where the topic came from (e.g. a news site name)
    pub source: String,
}

/// A registered chat client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub username: Username,
    pub registered_at: Timestamp,
}

impl Client {
    pub fn new(id: ClientId, username: Username, registered_at: Timestamp) -> Self {
        Self {
            id,
            username,
            registered_at,
        }
    }
}

/// Represents a chat room
///
/// Community rooms are created by clients and expire after a TTL.
/// Pinned rooms are seeded by the operator, carry a topic and never expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Display name
    pub name: RoomName,
    /// Client that created the room (`None` for pinned rooms)
    pub owner: Option<ClientId>,
    pub is_pinned: bool,
    pub topic: Option<Topic>,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    /// Timestamp after which the room is gone (`None` = never)
    pub expires_at: Option<Timestamp>,
}

impl Room {
    /// Create a community room owned by `owner` that expires `ttl_millis`
    /// after `created_at`.
    pub fn new(
        id: RoomId,
        name: RoomName,
        owner: ClientId,
        created_at: Timestamp,
        ttl_millis: i64,
    ) -> Self {
        Self {
            id,
            name,
            owner: Some(owner),
            is_pinned: false,
            topic: None,
            created_at,
            expires_at: Some(created_at.add_millis(ttl_millis)),
        }
    }

    /// Create a pinned room. Pinned rooms have no owner and never expire.
    pub fn pinned(id: RoomId, name: RoomName, topic: Option<Topic>, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            owner: None,
            is_pinned: true,
            topic,
            created_at,
            expires_at: None,
        }
    }

    /// Whether the room has expired at `now`
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Whether `client_id` created this room
    pub fn is_owned_by(&self, client_id: &ClientId) -> bool {
        self.owner.as_ref() == Some(client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::RoomIdFactory;

    fn alice() -> ClientId {
        ClientId::new("alice".to_string()).unwrap()
    }

    fn name(value: &str) -> RoomName {
        RoomName::new(value.to_string()).unwrap()
    }

    fn topic() -> Topic {
        Topic {
            title: "Rust 2024 edition".to_string(),
            description: "What changed".to_string(),
            url: "https://example.com/rust-2024".to_string(),
            source: "Example News".to_string(),
        }
    }

    #[test]
    fn test_room_new_is_community_room() {
        // テスト項目: 新しいルームはピン留めされず、トピックを持たず、期限が設定される
        // given (前提条件):
        let room_id = RoomIdFactory::generate().unwrap();

        // when (操作):
        let room = Room::new(
            room_id.clone(),
            name("general"),
            alice(),
            Timestamp::new(1000),
            500,
        );

        // then (期待する結果):
        assert_eq!(room.id, room_id);
        assert!(!room.is_pinned);
        assert!(room.topic.is_none());
        assert_eq!(room.expires_at, Some(Timestamp::new(1500)));
        assert!(room.is_owned_by(&alice()));
    }

    #[test]
    fn test_room_pinned_never_expires() {
        // テスト項目: ピン留めルームは期限切れにならない
        // given (前提条件):
        let room = Room::pinned(
            RoomId::new("today".to_string()).unwrap(),
            name("Today"),
            Some(topic()),
            Timestamp::new(0),
        );

        // then (期待する結果):
        assert!(room.is_pinned);
        assert!(room.owner.is_none());
        assert!(!room.is_expired(Timestamp::new(i64::MAX)));
        assert_eq!(room.topic, Some(topic()));
    }

    #[test]
    fn test_room_is_expired_boundary() {
        // テスト項目: expires_at ちょうどの時刻で期限切れと判定される
        // given (前提条件):
        let room = Room::new(
            RoomIdFactory::generate().unwrap(),
            name("general"),
            alice(),
            Timestamp::new(1000),
            500,
        );

        // then (期待する結果):
        assert!(!room.is_expired(Timestamp::new(1499)));
        assert!(room.is_expired(Timestamp::new(1500)));
    }

    #[test]
    fn test_room_is_owned_by_other_client() {
        // テスト項目: 作成者以外は所有者と判定されない
        // given (前提条件):
        let room = Room::new(
            RoomIdFactory::generate().unwrap(),
            name("general"),
            alice(),
            Timestamp::new(0),
            1,
        );
        let bob = ClientId::new("bob".to_string()).unwrap();

        // then (期待する結果):
        assert!(!room.is_owned_by(&bob));
    }
}
