mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::TodoRepository;
pub use types::Page;
