mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::CreateTodoRequest;
pub use types::{Todo, TodoKey};
