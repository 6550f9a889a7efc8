//! Domain layer for the chat room directory.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod moderation;
pub mod repository;
pub mod value_object;

pub use entity::{Client, Room, Topic};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{ClientIdFactory, RoomIdFactory};
pub use moderation::NameFilter;
pub use repository::{ClientRepository, RoomRepository};
pub use value_object::{ClientId, RoomId, RoomName, Timestamp, Username};

#[cfg(test)]
pub use repository::{MockClientRepository, MockRoomRepository};
