use chrono::NaiveDate;
use store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during coupon store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CouponError {
    #[error("Coupon not found: {0}")]
    NotFound(String),
    #[error("A coupon with code {0} already exists")]
    DuplicateCode(String),
    #[error("Invalid coupon code: {0}")]
    InvalidCode(String),
    #[error("Discount percentage must be in (0, 100], got {0}")]
    InvalidDiscountPercentage(f64),
    #[error("Max discount cannot be negative, got {0}")]
    NegativeMaxDiscount(f64),
    #[error("Expiration date {0} is in the past")]
    ExpiryInPast(NaiveDate),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CouponError {
    fn from(s: String) -> Self {
        CouponError::ActorCommunicationError(s)
    }
}

impl CouponError {
    /// Recovers the domain error travelling inside a framework error.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => CouponError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<CouponError>() {
                Ok(err) => *err,
                Err(other) => CouponError::ActorCommunicationError(other.to_string()),
            },
            other => CouponError::ActorCommunicationError(other.to_string()),
        }
    }
}
