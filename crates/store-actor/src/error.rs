//! # Framework Errors
//!
//! Common error type used by the store framework itself. Entity-specific
//! failures travel inside `EntityError` and can be downcast back to the
//! entity's own error enum by client wrappers.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
