use store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during product store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product price cannot be negative: {0}")]
    NegativePrice(f64),
    #[error("Insufficient stock for product {0}")]
    InsufficientStock(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(s: String) -> Self {
        ProductError::ActorCommunicationError(s)
    }
}

impl ProductError {
    /// Recovers the domain error travelling inside a framework error.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
