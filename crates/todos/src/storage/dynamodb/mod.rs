//! DynamoDB storage backend implementation.
//!
//! The table is keyed by `Email` (hash) and `Id` (range); every item is a
//! todo, so there are no entity-type discriminators or secondary indexes.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
