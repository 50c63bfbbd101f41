use store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during customer store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),
    #[error("Invalid CPF: {0}")]
    InvalidCpf(String),
    #[error("A customer with CPF {0} already exists")]
    DuplicateCpf(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(s: String) -> Self {
        CustomerError::ActorCommunicationError(s)
    }
}

impl CustomerError {
    /// Recovers the domain error travelling inside a framework error.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => CustomerError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<CustomerError>() {
                Ok(err) => *err,
                Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
            },
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
