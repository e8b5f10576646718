pub mod error;
pub mod not_found;
pub mod todos;

pub use error::ApiError;
