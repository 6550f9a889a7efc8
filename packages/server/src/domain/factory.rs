//! Domain factories for creating domain entities and value objects.

use super::{ClientId, RoomId, error::ValueObjectError};

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room identifiers,
/// separating the generation concern from the validation logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        RoomId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for generating ClientId instances.
pub struct ClientIdFactory;

impl ClientIdFactory {
    /// Generate a new ClientId with a random UUID v4.
    pub fn generate() -> Result<ClientId, ValueObjectError> {
        ClientId::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_factory_generate() {
        // テスト項目: RoomIdFactory::generate() で UUID v4 形式の RoomId を生成できる
        // when (操作):
        let result = RoomIdFactory::generate();

        // then (期待する結果):
        let room_id = result.unwrap();
        assert_eq!(room_id.as_str().len(), 36); // UUID v4 の標準長（ハイフン含む）
    }

    #[test]
    fn test_room_id_factory_generate_uniqueness() {
        // テスト項目: RoomIdFactory::generate() は毎回異なる ID を生成する
        // when (操作):
        let room_id1 = RoomIdFactory::generate().unwrap();
        let room_id2 = RoomIdFactory::generate().unwrap();

        // then (期待する結果):
        assert_ne!(room_id1, room_id2);
    }

    #[test]
    fn test_client_id_factory_generate_uniqueness() {
        // テスト項目: ClientIdFactory::generate() は毎回異なる ID を生成する
        let client_id1 = ClientIdFactory::generate().unwrap();
        let client_id2 = ClientIdFactory::generate().unwrap();

        assert_eq!(client_id1.as_str().len(), 36);
        assert_ne!(client_id1, client_id2);
    }
}
