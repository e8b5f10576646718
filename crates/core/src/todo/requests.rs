//! API request types for todo operations.
//!
//! Following the Functional Core pattern, validation here is pure: it inspects
//! an already-parsed JSON document and either produces a typed request or the
//! first validation failure.

use serde_json::Value;

use super::error::ValidationError;
use super::types::Todo;

/// Request payload for creating a new todo.
///
/// Clients never choose the id; [`CreateTodoRequest::into_todo`] assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub email: String,
    pub title: String,
    pub is_completed: bool,
}

impl CreateTodoRequest {
    pub fn new(email: impl Into<String>, title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            email: email.into(),
            title: title.into(),
            is_completed,
        }
    }

    /// Validates a JSON body, checking `Email`, `Title` and `IsCompleted` in
    /// that order and stopping at the first failure.
    ///
    /// A body that is not an object is treated as one with every field
    /// missing. Unknown fields, including a client-supplied `Id`, are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let email = match body.get("Email") {
            Some(Value::String(email)) => email,
            _ => return Err(ValidationError::EmailNotString),
        };
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        let title = match body.get("Title") {
            Some(Value::String(title)) => title,
            _ => return Err(ValidationError::TitleNotString),
        };

        let is_completed = match body.get("IsCompleted") {
            Some(Value::Bool(is_completed)) => *is_completed,
            _ => return Err(ValidationError::IsCompletedNotBoolean),
        };

        Ok(Self::new(email.as_str(), title.as_str(), is_completed))
    }

    /// Convert into a [`Todo`] with a newly generated id.
    pub fn into_todo(self) -> Todo {
        Todo::new(self.email, self.title, self.is_completed)
    }
}
