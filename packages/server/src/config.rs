//! Server configuration from command-line arguments and environment.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    domain::NameFilter,
    usecase::{RoomPolicy, create_room::DEFAULT_MAX_ROOMS},
};

/// Chat room API server
#[derive(Debug, Clone, Parser)]
#[command(name = "tsudoi-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TSUDOI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TSUDOI_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Maximum number of live community rooms
    #[arg(long, env = "TSUDOI_MAX_ROOMS", default_value_t = DEFAULT_MAX_ROOMS)]
    pub max_rooms: usize,

    /// Lifetime of a community room in seconds
    #[arg(
        long,
        env = "TSUDOI_ROOM_TTL_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub room_ttl_secs: u64,

    /// JSON file describing pinned rooms and their topics
    #[arg(long, env = "TSUDOI_PINNED_ROOMS")]
    pub pinned_rooms: Option<PathBuf>,

    /// Comma-separated words rejected in room names (built-in list when
    /// unset, moderation disabled when empty)
    #[arg(long, env = "TSUDOI_BLOCKED_WORDS", value_delimiter = ',')]
    pub blocked_words: Option<Vec<String>>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "TSUDOI_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Room creation limits derived from this configuration
    pub fn room_policy(&self) -> RoomPolicy {
        let ttl_millis = self.room_ttl_secs.saturating_mul(1000);
        RoomPolicy {
            max_rooms: self.max_rooms,
            room_ttl_millis: i64::try_from(ttl_millis).unwrap_or(i64::MAX),
            name_filter: self
                .blocked_words
                .as_ref()
                .map(NameFilter::new)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        // テスト項目: 引数なしの場合はデフォルト値が使われる
        // when (操作):
        let config = ServerConfig::try_parse_from(["tsudoi-server"]).unwrap();

        // then (期待する結果):
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.room_policy(), RoomPolicy::default());
        assert!(config.pinned_rooms.is_none());
    }

    #[test]
    fn test_parse_custom_values() {
        // テスト項目: 引数で設定を上書きできる
        // when (操作):
        let config = ServerConfig::try_parse_from([
            "tsudoi-server",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--max-rooms",
            "5",
            "--room-ttl-secs",
            "60",
            "--pinned-rooms",
            "pinned.json",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(
            config.room_policy(),
            RoomPolicy {
                max_rooms: 5,
                room_ttl_millis: 60_000,
                name_filter: NameFilter::default(),
            }
        );
        assert_eq!(config.pinned_rooms, Some(PathBuf::from("pinned.json")));
    }

    #[test]
    fn test_parse_blocked_words() {
        // テスト項目: ブロック対象の単語をカンマ区切りで指定できる
        // when (操作):
        let config =
            ServerConfig::try_parse_from(["tsudoi-server", "--blocked-words", "spam,Scam"]).unwrap();

        // then (期待する結果):
        assert_eq!(
            config.room_policy().name_filter,
            NameFilter::new(["scam", "spam"])
        );
    }

    #[test]
    fn test_parse_zero_ttl_rejected() {
        // テスト項目: TTL に 0 は指定できない
        let result = ServerConfig::try_parse_from(["tsudoi-server", "--room-ttl-secs", "0"]);

        assert!(result.is_err());
    }
}
