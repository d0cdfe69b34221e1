use thiserror::Error;

pub mod memory;
pub mod request;

pub use memory::InMemoryRequestStore;
pub use request::SqlRequestStore;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}
