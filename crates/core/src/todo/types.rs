use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item owned by the user identified by `email`.
///
/// Serialized with PascalCase field names (`Email`, `Id`, `Title`,
/// `IsCompleted`), which are also the attribute names used in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    /// Partition key.
    pub email: String,
    /// Sort key, assigned by the server on creation.
    pub id: String,
    pub title: String,
    pub is_completed: bool,
}

impl Todo {
    /// Creates a new todo with a freshly generated v4 UUID as its id.
    pub fn new(email: impl Into<String>, title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            email: email.into(),
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            is_completed,
        }
    }

    /// Sets a specific ID for this todo (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the primary key of this todo.
    pub fn key(&self) -> TodoKey {
        TodoKey::new(&self.email, &self.id)
    }
}

/// Primary key of a todo: partition key `email` plus sort key `id`.
///
/// Ordering follows the key layout of a partitioned store (by email, then id),
/// which is what makes it usable as a paging cursor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TodoKey {
    pub email: String,
    pub id: String,
}

impl TodoKey {
    pub fn new(email: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_v4_uuid() {
        let todo = Todo::new("a@b.com", "Buy milk", false);

        let id = Uuid::parse_str(&todo.id).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let first = Todo::new("a@b.com", "x", false);
        let second = Todo::new("a@b.com", "x", false);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_serializes_with_pascal_case_names() {
        let todo = Todo::new("a@b.com", "Buy milk", true).with_id("todo-1");

        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Email": "a@b.com",
                "Id": "todo-1",
                "Title": "Buy milk",
                "IsCompleted": true,
            })
        );
    }

    #[test]
    fn test_key_matches_todo() {
        let todo = Todo::new("a@b.com", "x", false).with_id("todo-1");

        assert_eq!(todo.key(), TodoKey::new("a@b.com", "todo-1"));
    }

    #[test]
    fn test_keys_order_by_email_then_id() {
        let mut keys = vec![
            TodoKey::new("b@b.com", "1"),
            TodoKey::new("a@b.com", "2"),
            TodoKey::new("a@b.com", "1"),
        ];

        keys.sort();

        assert_eq!(
            keys,
            vec![
                TodoKey::new("a@b.com", "1"),
                TodoKey::new("a@b.com", "2"),
                TodoKey::new("b@b.com", "1"),
            ]
        );
    }
}
