//! Pinned room seeding.
//!
//! Pinned rooms are read from a JSON file at startup:
//!
//! ```json
//! [
//!   {
//!     "id": "today",
//!     "name": "Today's topic",
//!     "topic": {
//!       "title": "...",
//!       "description": "...",
//!       "url": "https://...",
//!       "source": "..."
//!     }
//!   }
//! ]
//! ```
//!
//! `topic` may be omitted; when present all four of its keys are required.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Room, RoomId, RoomName, Timestamp, Topic, ValueObjectError};

/// Errors raised while loading the pinned room file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read pinned room file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pinned room file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pinned room at index {index}: {source}")]
    InvalidRoom {
        index: usize,
        #[source]
        source: ValueObjectError,
    },
}

#[derive(Debug, Deserialize)]
struct PinnedRoomSeed {
    id: String,
    name: String,
    #[serde(default)]
    topic: Option<TopicSeed>,
}

#[derive(Debug, Deserialize)]
struct TopicSeed {
    title: String,
    description: String,
    url: String,
    source: String,
}

impl From<TopicSeed> for Topic {
    fn from(seed: TopicSeed) -> Self {
        Topic {
            title: seed.title,
            description: seed.description,
            url: seed.url,
            source: seed.source,
        }
    }
}

/// Parse pinned rooms from a JSON document.
pub fn parse_pinned_rooms(
    json: &str,
    path: &Path,
    created_at: Timestamp,
) -> Result<Vec<Room>, SeedError> {
    let seeds: Vec<PinnedRoomSeed> =
        serde_json::from_str(json).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| {
            let id = RoomId::new(seed.id).map_err(|source| SeedError::InvalidRoom { index, source })?;
            let name =
                RoomName::new(seed.name).map_err(|source| SeedError::InvalidRoom { index, source })?;
            Ok(Room::pinned(id, name, seed.topic.map(Topic::from), created_at))
        })
        .collect()
}

/// Load pinned rooms from `path`.
pub async fn load_pinned_rooms(path: &Path, created_at: Timestamp) -> Result<Vec<Room>, SeedError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let rooms = parse_pinned_rooms(&json, path, created_at)?;
    tracing::info!("Loaded {} pinned room(s) from {}", rooms.len(), path.display());
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {
            "id": "today",
            "name": "Today's topic",
            "topic": {
                "title": "Rust 2024 edition",
                "description": "What changed",
                "url": "https://example.com/rust-2024",
                "source": "Example News"
            }
        },
        { "id": "lobby", "name": "Lobby" }
    ]"#;

    #[test]
    fn test_parse_pinned_rooms() {
        // テスト項目: JSON からピン留めルームを読み込める
        // when (操作):
        let rooms = parse_pinned_rooms(SEED, Path::new("seed.json"), Timestamp::new(0)).unwrap();

        // then (期待する結果):
        assert_eq!(rooms.len(), 2);
        assert!(rooms.iter().all(|room| room.is_pinned));
        assert_eq!(rooms[0].id.as_str(), "today");
        assert_eq!(
            rooms[0].topic.as_ref().map(|t| t.source.as_str()),
            Some("Example News")
        );
        assert!(rooms[1].topic.is_none());
    }

    #[test]
    fn test_parse_partial_topic_fails() {
        // テスト項目: トピックの一部だけが指定されたファイルは読み込めない
        // given (前提条件):
        let json = r#"[{ "id": "today", "name": "Today", "topic": { "title": "only title" } }]"#;

        // when (操作):
        let result = parse_pinned_rooms(json, Path::new("seed.json"), Timestamp::new(0));

        // then (期待する結果):
        assert!(matches!(result, Err(SeedError::Parse { .. })));
    }

    #[test]
    fn test_parse_invalid_room_id_reports_index() {
        // テスト項目: 不正なルーム ID はインデックス付きのエラーになる
        let json = r#"[{ "id": "ok", "name": "A" }, { "id": "not ok", "name": "B" }]"#;

        let result = parse_pinned_rooms(json, Path::new("seed.json"), Timestamp::new(0));

        assert!(matches!(
            result,
            Err(SeedError::InvalidRoom {
                index: 1,
                source: ValueObjectError::RoomIdInvalidFormat(_)
            })
        ));
    }

    #[tokio::test]
    async fn test_load_pinned_rooms_from_file() {
        // テスト項目: ファイルからピン留めルームを読み込める
        // given (前提条件):
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        // when (操作):
        let rooms = load_pinned_rooms(file.path(), Timestamp::new(42))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].created_at, Timestamp::new(42));
    }

    #[tokio::test]
    async fn test_load_pinned_rooms_missing_file() {
        // テスト項目: 存在しないファイルは Io エラーになる
        let result = load_pinned_rooms(Path::new("/nonexistent/pinned.json"), Timestamp::new(0)).await;

        assert!(matches!(result, Err(SeedError::Io { .. })));
    }
}
