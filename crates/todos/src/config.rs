use std::{env, fmt, num::NonZeroU32, str::FromStr};

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// AWS DynamoDB (default).
    #[default]
    DynamoDb,
    /// Process-local storage, lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(format!("Unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => f.write_str("dynamodb"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the todos (default: "todos")
    pub table_name: String,
    /// Storage backend (default: DynamoDB)
    pub storage: StorageBackend,
    /// Maximum items per query/scan page; unset lets the store decide
    pub page_size: Option<NonZeroU32>,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODO_TABLE` - DynamoDB table name (default: "todos")
    /// - `TODO_STORAGE` - `dynamodb` or `memory` (default: "dynamodb")
    /// - `TODO_PAGE_SIZE` - Maximum items per page (default: unset)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup("TODO_STORAGE") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to default storage backend");
                StorageBackend::default()
            }),
            None => StorageBackend::default(),
        };

        Self {
            table_name: lookup("TODO_TABLE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "todos".to_string()),
            storage,
            page_size: lookup("TODO_PAGE_SIZE")
                .and_then(|v| v.trim().parse::<NonZeroU32>().ok()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.trim().is_empty()),
        }
    }
}
