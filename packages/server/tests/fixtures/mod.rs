//! Test server fixture for HTTP integration tests.

use std::{net::SocketAddr, sync::Arc};

use tokio::{net::TcpListener, sync::oneshot};
use tsudoi_server::{
    domain::Room,
    infrastructure::repository::{InMemoryClientRepository, InMemoryRoomRepository},
    ui::{serve, state::AppState},
    usecase::RoomPolicy,
};

/// A server bound to an ephemeral port, shut down on drop.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start with no rooms and the default policy
    pub async fn start() -> Self {
        Self::start_with(Vec::new(), RoomPolicy::default()).await
    }

    /// Start with pre-seeded rooms and a custom policy
    pub async fn start_with(rooms: Vec<Room>, policy: RoomPolicy) -> Self {
        let state = Arc::new(AppState::new(
            Arc::new(InMemoryRoomRepository::with_rooms(rooms)),
            Arc::new(InMemoryClientRepository::new()),
            policy,
        ));
        Self::start_with_state(state).await
    }

    pub async fn start_with_state(state: Arc<AppState>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(serve(listener, state, async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
