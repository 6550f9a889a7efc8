//! InMemory Client Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Client, ClientId, ClientRepository, RepositoryError};

/// インメモリ Client Repository 実装
#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: Mutex<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert(&self, client: Client) -> Result<(), RepositoryError> {
        let mut clients = self.clients.lock().await;
        if clients.contains_key(&client.id) {
            return Err(RepositoryError::ClientAlreadyExists(
                client.id.as_str().to_string(),
            ));
        }
        clients.insert(client.id.clone(), client);
        Ok(())
    }

    async fn find_by_id(&self, client_id: &ClientId) -> Result<Option<Client>, RepositoryError> {
        let clients = self.clients.lock().await;
        Ok(clients.get(client_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        let clients = self.clients.lock().await;
        Ok(clients.values().cloned().collect())
    }
}
