//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod client;
pub mod create_room;
pub mod error;
pub mod query_room;

pub use client::{GetClientUseCase, ListClientsUseCase, RegisterClientUseCase};
pub use create_room::{CreateRoomUseCase, RoomPolicy};
pub use error::{ClientError, CreateRoomError, RoomQueryError};
pub use query_room::{GetRoomUseCase, ListRoomsUseCase};
