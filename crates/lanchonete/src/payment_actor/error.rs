use store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during payment store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PaymentError {
    fn from(s: String) -> Self {
        PaymentError::ActorCommunicationError(s)
    }
}

impl PaymentError {
    /// Recovers the domain error travelling inside a framework error.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => PaymentError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<PaymentError>() {
                Ok(err) => *err,
                Err(other) => PaymentError::ActorCommunicationError(other.to_string()),
            },
            other => PaymentError::ActorCommunicationError(other.to_string()),
        }
    }
}
