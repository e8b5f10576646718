//! Functional core of the todos service.
//!
//! Pure data types, request validation and the storage contract. Nothing in
//! this crate performs I/O; the `todos` binary supplies the imperative shell.

pub mod storage;
pub mod todo;
