//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todos_core::storage::{Page, Result, TodoRepository};
use todos_core::todo::{Todo, TodoKey};

use super::conversions::{item_to_key, item_to_todo, key_to_item, todo_to_item};
use super::error::{
    map_connection_error, map_get_item_error, map_put_item_error, map_query_error, map_scan_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one client for the lifetime of the process; the SDK client is safe
/// to share between concurrent requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    page_size: Option<i32>,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: None,
        }
    }

    /// Caps the number of items DynamoDB evaluates per query or scan page.
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Creates a new repository from the application configuration.
    ///
    /// Uses the AWS SDK default credential chain. `AWS_ENDPOINT_URL` from the
    /// configuration points the client at DynamoDB Local.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        if sdk_config.region().is_none() {
            return Err(map_connection_error(
                "No AWS region configured (set AWS_REGION)",
            ));
        }

        let client = Client::new(&sdk_config);

        // Sizes above i32::MAX leave the page unlimited
        let page_size = config
            .page_size
            .and_then(|size| i32::try_from(size.get()).ok());

        Ok(Self::new(client, &config.table_name).with_page_size(page_size))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        let item = todo_to_item(todo);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_todo(&self, email: &str, id: &str) -> Result<Option<Todo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(&TodoKey::new(email, id))))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_todos_page(&self, email: &str, start: Option<TodoKey>) -> Result<Page<Todo>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(keys::PARTITION_KEY_CONDITION)
            .expression_attribute_names(keys::EMAIL_NAME_PLACEHOLDER, keys::ATTR_EMAIL)
            .expression_attribute_values(
                keys::EMAIL_VALUE_PLACEHOLDER,
                AttributeValue::S(email.to_string()),
            )
            .set_exclusive_start_key(start.as_ref().map(key_to_item))
            .set_limit(self.page_size)
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        let todos = items.iter().map(item_to_todo).collect::<Result<Vec<_>>>()?;
        let next = result
            .last_evaluated_key
            .filter(|key| !key.is_empty())
            .map(|key| item_to_key(&key))
            .transpose()?;

        let page = Page { items: todos, next };
        tracing::debug!(
            %email,
            count = page.items.len(),
            more = !page.is_last(),
            "Queried todo page"
        );

        Ok(page)
    }

    async fn scan_todos_page(&self, start: Option<TodoKey>) -> Result<Page<Todo>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start.as_ref().map(key_to_item))
            .set_limit(self.page_size)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        let todos = items.iter().map(item_to_todo).collect::<Result<Vec<_>>>()?;
        let next = result
            .last_evaluated_key
            .filter(|key| !key.is_empty())
            .map(|key| item_to_key(&key))
            .transpose()?;

        let page = Page { items: todos, next };
        tracing::debug!(count = page.items.len(), more = !page.is_last(), "Scanned todo page");

        Ok(page)
    }
}
