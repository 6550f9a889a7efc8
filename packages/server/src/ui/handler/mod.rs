//! Handler modules for HTTP endpoints.

pub mod client;
pub mod http;
pub mod room;

pub use client::{get_client, list_clients, register_client};
pub use http::health_check;
pub use room::{create_room, get_room, list_rooms};
