//! DynamoDB attribute names and expressions.
//!
//! Attribute names match the JSON field names of a todo.

pub const ATTR_EMAIL: &str = "Email";
pub const ATTR_ID: &str = "Id";
pub const ATTR_TITLE: &str = "Title";
pub const ATTR_IS_COMPLETED: &str = "IsCompleted";

/// Key condition for querying a single partition.
///
/// Uses a placeholder name so the expression stays valid even if the
/// attribute name collides with a reserved word.
pub const PARTITION_KEY_CONDITION: &str = "#email = :email";
pub const EMAIL_NAME_PLACEHOLDER: &str = "#email";
pub const EMAIL_VALUE_PLACEHOLDER: &str = ":email";
