//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::RepositoryError;
use todos_core::todo::{Todo, TodoKey};

use super::keys::{ATTR_EMAIL, ATTR_ID, ATTR_IS_COMPLETED, ATTR_TITLE};

/// Convert a Todo to DynamoDB item.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = key_to_item(&todo.key());

    item.insert(ATTR_TITLE.to_string(), AttributeValue::S(todo.title.clone()));
    item.insert(
        ATTR_IS_COMPLETED.to_string(),
        AttributeValue::Bool(todo.is_completed),
    );

    item
}

/// Convert a DynamoDB item to Todo.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        email: get_string(item, ATTR_EMAIL)?,
        id: get_string(item, ATTR_ID)?,
        title: get_string(item, ATTR_TITLE)?,
        is_completed: get_bool(item, ATTR_IS_COMPLETED)?,
    })
}

/// Convert a TodoKey to the key map used by GetItem and ExclusiveStartKey.
pub fn key_to_item(key: &TodoKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_EMAIL.to_string(), AttributeValue::S(key.email.clone())),
        (ATTR_ID.to_string(), AttributeValue::S(key.id.clone())),
    ])
}

/// Convert a LastEvaluatedKey map to TodoKey.
pub fn item_to_key(item: &HashMap<String, AttributeValue>) -> Result<TodoKey, RepositoryError> {
    Ok(TodoKey {
        email: get_string(item, ATTR_EMAIL)?,
        id: get_string(item, ATTR_ID)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
