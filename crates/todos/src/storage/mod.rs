//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TodoRepository`
//! trait defined in `todos_core::storage`. The backend is chosen at startup
//! from [`Config::storage`](crate::config::Config):
//!
//! - `dynamodb` (default): AWS DynamoDB using `aws-sdk-dynamodb`
//! - `memory`: process-local maps, for local development and tests

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
