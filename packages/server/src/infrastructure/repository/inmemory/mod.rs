//! HashMap ベースのインメモリ Repository 実装

mod client;
mod room;

pub use client::InMemoryClientRepository;
pub use room::InMemoryRoomRepository;
