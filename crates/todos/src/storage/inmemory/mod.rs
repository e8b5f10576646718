//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `TodoRepository`
//! that stores all data in a BTreeMap wrapped in `Arc<RwLock<_>>`. It backs
//! the `memory` storage mode and the router tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_page_size(10);
//! ```

mod repository;

pub use repository::InMemoryRepository;
