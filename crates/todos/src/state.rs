//! Application state with repository-based storage.
//!
//! The repository is built once at startup and shared by every request
//! handler through axum's `State` extractor.

use std::sync::Arc;

use todos_core::storage::TodoRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// Shared application state.
///
/// Cloning is cheap: the repository sits behind an `Arc` and has no mutable
/// fields beyond whatever the backend itself synchronizes.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository for the configured backend.
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }

    /// Creates AppState with the storage backend selected by `config`.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        match config.storage {
            StorageBackend::DynamoDb => {
                let repo = DynamoDbRepository::from_config(config).await?;
                tracing::info!(
                    table = %repo.table_name(),
                    endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
                    storage = %config.storage,
                    "Using DynamoDB storage"
                );
                Ok(Self::new(Arc::new(repo)))
            }
            StorageBackend::Memory => {
                let repo = match config.page_size {
                    Some(size) => InMemoryRepository::new()
                        .with_page_size(usize::try_from(size.get()).unwrap_or(usize::MAX)),
                    None => InMemoryRepository::new(),
                };
                tracing::info!(storage = %config.storage, "Using in-memory storage");
                Ok(Self::new(Arc::new(repo)))
            }
        }
    }
}

impl Default for AppState {
    /// In-memory state with no data.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_core::todo::Todo;

    #[tokio::test]
    async fn test_from_config_memory_backend() {
        let config = Config::from_lookup(|key| match key {
            "TODO_STORAGE" => Some("memory".to_string()),
            "TODO_PAGE_SIZE" => Some("1".to_string()),
            _ => None,
        });

        let state = AppState::from_config(&config).await.unwrap();
        assert!(state.todo_repo.list_todos().await.unwrap().is_empty());

        for title in ["one", "two"] {
            let todo = Todo::new("a@b.com", title, false);
            state.todo_repo.create_todo(&todo).await.unwrap();
        }

        let first = state.todo_repo.scan_todos_page(None).await.unwrap();
        assert_eq!(first.items.len(), 1);
        assert!(!first.is_last());
        assert_eq!(state.todo_repo.list_todos().await.unwrap().len(), 2);
    }
}
