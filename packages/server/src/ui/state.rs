//! Server state shared by all handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    domain::{ClientRepository, RoomRepository},
    usecase::RoomPolicy,
};

/// Shared application state
pub struct AppState {
    /// Room storage
    pub room_repository: Arc<dyn RoomRepository>,
    /// Registered clients
    pub client_repository: Arc<dyn ClientRepository>,
    /// Limits applied to room creation
    pub room_policy: RoomPolicy,
    /// Held by room creation from the limit checks until the insert
    pub room_creation_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        client_repository: Arc<dyn ClientRepository>,
        room_policy: RoomPolicy,
    ) -> Self {
        Self {
            room_repository,
            client_repository,
            room_policy,
            room_creation_lock: Arc::new(Mutex::new(())),
        }
    }
}
