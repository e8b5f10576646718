//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{Page, Result, TodoRepository};
use todos_core::todo::{Todo, TodoKey};

/// In-memory storage backend.
///
/// Items are ordered by `(email, id)`, the same layout a DynamoDB partition
/// gives them, so queries and scans page exactly like the real store.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<BTreeMap<TodoKey, Todo>>>,
    page_size: Option<usize>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits every query or scan page to `page_size` items.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Cuts an ordered run of todos into one page.
    fn paginate<'a>(&self, todos: impl Iterator<Item = &'a Todo>) -> Page<Todo> {
        let Some(page_size) = self.page_size else {
            return Page::last(todos.cloned().collect());
        };

        let mut items: Vec<Todo> = todos.take(page_size + 1).cloned().collect();
        if items.len() > page_size {
            items.truncate(page_size);
            let next = items[page_size - 1].key();
            Page::with_next(items, next)
        } else {
            Page::last(items)
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.key(), todo.clone());
        Ok(())
    }

    async fn get_todo(&self, email: &str, id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(&TodoKey::new(email, id)).cloned())
    }

    async fn query_todos_page(&self, email: &str, start: Option<TodoKey>) -> Result<Page<Todo>> {
        let todos = self.todos.read().await;
        let lower = match start {
            Some(start) if start.email == email => Bound::Excluded(start),
            _ => Bound::Included(TodoKey::new(email, "")),
        };

        Ok(self.paginate(
            todos
                .range((lower, Bound::Unbounded))
                .take_while(|(key, _)| key.email == email)
                .map(|(_, todo)| todo),
        ))
    }

    async fn scan_todos_page(&self, start: Option<TodoKey>) -> Result<Page<Todo>> {
        let todos = self.todos.read().await;
        let lower = match start {
            Some(start) => Bound::Excluded(start),
            None => Bound::Unbounded,
        };

        Ok(self.paginate(todos.range((lower, Bound::Unbounded)).map(|(_, todo)| todo)))
    }
}
