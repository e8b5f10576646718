use async_trait::async_trait;

use crate::todo::{Todo, TodoKey};

use super::{Page, Result};

/// Repository for todo operations.
///
/// Reads over more than one item are page-based so that a store's page limit
/// can never silently truncate a result. `get_todos_by_email` and
/// `list_todos` follow the cursors until the read is exhausted.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Writes a todo unconditionally, replacing any item with the same key.
    async fn create_todo(&self, todo: &Todo) -> Result<()>;

    /// Gets a todo by its email and id.
    async fn get_todo(&self, email: &str, id: &str) -> Result<Option<Todo>>;

    /// Gets one page of the todos in the `email` partition, starting after
    /// `start` (exclusive).
    async fn query_todos_page(&self, email: &str, start: Option<TodoKey>) -> Result<Page<Todo>>;

    /// Gets one page of all todos, starting after `start` (exclusive).
    async fn scan_todos_page(&self, start: Option<TodoKey>) -> Result<Page<Todo>>;

    /// Gets every todo in the `email` partition.
    async fn get_todos_by_email(&self, email: &str) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();
        let mut start = None;
        loop {
            let page = self.query_todos_page(email, start).await?;
            todos.extend(page.items);
            match page.next {
                Some(next) => start = Some(next),
                None => return Ok(todos),
            }
        }
    }

    /// Gets every todo in the store.
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();
        let mut start = None;
        loop {
            let page = self.scan_todos_page(start).await?;
            todos.extend(page.items);
            match page.next {
                Some(next) => start = Some(next),
                None => return Ok(todos),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::storage::RepositoryError;

    /// Serves a fixed, sorted list of todos two at a time and records every
    /// start key it was called with.
    struct PagedRepository {
        todos: Vec<Todo>,
        starts: Mutex<Vec<Option<TodoKey>>>,
        fail_after: Option<usize>,
    }

    impl PagedRepository {
        fn new(todos: Vec<Todo>) -> Self {
            Self {
                todos,
                starts: Mutex::new(Vec::new()),
                fail_after: None,
            }
        }

        fn page_after(&self, start: Option<TodoKey>, email: Option<&str>) -> Result<Page<Todo>> {
            let mut starts = self.starts.lock().unwrap();
            if self.fail_after == Some(starts.len()) {
                return Err(RepositoryError::ReadFailed("boom".to_string()));
            }
            starts.push(start.clone());

            let remaining: Vec<Todo> = self
                .todos
                .iter()
                .filter(|t| email.is_none_or(|email| t.email == email))
                .filter(|t| start.as_ref().is_none_or(|start| &t.key() > start))
                .cloned()
                .collect();

            if remaining.len() > 2 {
                let items = remaining[..2].to_vec();
                let next = items[1].key();
                Ok(Page::with_next(items, next))
            } else {
                Ok(Page::last(remaining))
            }
        }
    }

    #[async_trait]
    impl TodoRepository for PagedRepository {
        async fn create_todo(&self, _todo: &Todo) -> Result<()> {
            Ok(())
        }

        async fn get_todo(&self, email: &str, id: &str) -> Result<Option<Todo>> {
            Ok(self
                .todos
                .iter()
                .find(|t| t.email == email && t.id == id)
                .cloned())
        }

        async fn query_todos_page(
            &self,
            email: &str,
            start: Option<TodoKey>,
        ) -> Result<Page<Todo>> {
            self.page_after(start, Some(email))
        }

        async fn scan_todos_page(&self, start: Option<TodoKey>) -> Result<Page<Todo>> {
            self.page_after(start, None)
        }
    }

    fn sample_todos() -> Vec<Todo> {
        vec![
            Todo::new("a@b.com", "one", false).with_id("1"),
            Todo::new("a@b.com", "two", true).with_id("2"),
            Todo::new("a@b.com", "three", false).with_id("3"),
            Todo::new("c@d.com", "four", false).with_id("1"),
            Todo::new("c@d.com", "five", false).with_id("2"),
        ]
    }

    #[tokio::test]
    async fn test_list_todos_follows_every_page() {
        let repo = PagedRepository::new(sample_todos());

        let todos = repo.list_todos().await.unwrap();

        assert_eq!(todos, sample_todos());
        assert_eq!(
            *repo.starts.lock().unwrap(),
            vec![
                None,
                Some(TodoKey::new("a@b.com", "2")),
                Some(TodoKey::new("c@d.com", "1")),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_todos_by_email_follows_every_page() {
        let repo = PagedRepository::new(sample_todos());

        let todos = repo.get_todos_by_email("a@b.com").await.unwrap();

        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(repo.starts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_todos_by_email_unknown_partition_is_empty() {
        let repo = PagedRepository::new(sample_todos());

        let todos = repo.get_todos_by_email("nobody@b.com").await.unwrap();

        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_error_on_later_page_is_returned() {
        let mut repo = PagedRepository::new(sample_todos());
        repo.fail_after = Some(1);

        let result = repo.list_todos().await;

        assert_eq!(
            result,
            Err(RepositoryError::ReadFailed("boom".to_string()))
        );
    }
}
