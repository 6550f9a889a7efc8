//! UseCase: クライアント登録・参照
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterClientUseCase / GetClientUseCase / ListClientsUseCase
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録したクライアントを取得・一覧できる
//! - 異常系：不正なユーザー名、未登録のクライアント ID、Repository の失敗

use std::sync::Arc;

use tsudoi_shared::time::get_jst_timestamp;

use crate::domain::{Client, ClientId, ClientIdFactory, ClientRepository, Timestamp, Username};

use super::error::ClientError;

/// クライアント登録のユースケース
pub struct RegisterClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl RegisterClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// ユーザー名を検証し、新しい ID でクライアントを登録する
    pub async fn execute(&self, username: String) -> Result<Client, ClientError> {
        let username = Username::new(username).map_err(ClientError::InvalidUsername)?;
        let id = ClientIdFactory::generate().map_err(ClientError::IdGeneration)?;
        let client = Client::new(id, username, Timestamp::new(get_jst_timestamp()));

        self.repository.insert(client.clone()).await?;
        tracing::info!(
            "Client '{}' registered as '{}'",
            client.id,
            client.username
        );
        Ok(client)
    }
}

/// クライアント取得のユースケース
pub struct GetClientUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl GetClientUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// ID でクライアントを取得する。不正な ID は未登録として扱う
    pub async fn execute(&self, client_id: String) -> Result<Client, ClientError> {
        let Ok(id) = ClientId::new(client_id.clone()) else {
            return Err(ClientError::NotFound(client_id));
        };
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(ClientError::NotFound(client_id))
    }
}

/// クライアント一覧のユースケース
pub struct ListClientsUseCase {
    repository: Arc<dyn ClientRepository>,
}

impl ListClientsUseCase {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// 登録順（同時刻は ID 順）でクライアントを返す
    pub async fn execute(&self) -> Result<Vec<Client>, ClientError> {
        let mut clients = self.repository.list().await?;
        clients.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockClientRepository, RepositoryError, ValueObjectError},
        infrastructure::repository::InMemoryClientRepository,
    };

    fn create_test_repository() -> Arc<InMemoryClientRepository> {
        Arc::new(InMemoryClientRepository::new())
    }

    #[tokio::test]
    async fn test_register_client_success() {
        // テスト項目: ユーザー名を指定してクライアントを登録できる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterClientUseCase::new(repository.clone());

        // when (操作):
        let client = usecase.execute("  alice ".to_string()).await.unwrap();

        // then (期待する結果):
        assert_eq!(client.username.as_str(), "alice");
        let stored = repository.find_by_id(&client.id).await.unwrap();
        assert_eq!(stored, Some(client));
    }

    #[tokio::test]
    async fn test_register_client_empty_username() {
        // テスト項目: 空のユーザー名では登録できない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = RegisterClientUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute("   ".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ClientError::InvalidUsername(ValueObjectError::UsernameEmpty))
        );
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_client_repository_failure() {
        // テスト項目: Repository の失敗がそのまま返される
        // given (前提条件):
        let mut repository = MockClientRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("disk full".to_string())));
        let usecase = RegisterClientUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("alice".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ClientError::Repository(RepositoryError::Storage(
                "disk full".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_get_client_not_found() {
        // テスト項目: 未登録のクライアント ID は NotFound になる
        let usecase = GetClientUseCase::new(create_test_repository());

        let result = usecase.execute("nobody".to_string()).await;

        assert_eq!(result, Err(ClientError::NotFound("nobody".to_string())));
    }

    #[tokio::test]
    async fn test_get_client_success() {
        // テスト項目: 登録済みのクライアントを ID で取得できる
        // given (前提条件):
        let repository = create_test_repository();
        let registered = RegisterClientUseCase::new(repository.clone())
            .execute("alice".to_string())
            .await
            .unwrap();

        // when (操作):
        let found = GetClientUseCase::new(repository)
            .execute(registered.id.as_str().to_string())
            .await;

        // then (期待する結果):
        assert_eq!(found, Ok(registered));
    }

    #[tokio::test]
    async fn test_list_clients_sorted_by_registration() {
        // テスト項目: クライアント一覧は登録時刻順に並ぶ
        // given (前提条件):
        let repository = create_test_repository();
        for (id, name, at) in [("c3", "carol", 300), ("c1", "alice", 100), ("c2", "bob", 200)] {
            repository
                .insert(Client::new(
                    ClientId::new(id.to_string()).unwrap(),
                    Username::new(name.to_string()).unwrap(),
                    Timestamp::new(at),
                ))
                .await
                .unwrap();
        }

        // when (操作):
        let clients = ListClientsUseCase::new(repository).execute().await.unwrap();

        // then (期待する結果):
        let names: Vec<&str> = clients.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }
}
