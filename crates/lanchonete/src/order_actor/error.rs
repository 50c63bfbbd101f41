use crate::coupon_actor::CouponError;
use crate::product_actor::ProductError;
use store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur while creating an order or moving it through
/// the kitchen workflow.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Item quantity must be greater than zero")]
    ZeroQuantity,
    #[error("A coupon requires an identified customer")]
    CouponRequiresCustomer,
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),
    #[error("Coupon {0} is not active")]
    CouponInactive(String),
    #[error("Coupon {0} has expired")]
    CouponExpired(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Insufficient stock for product {0}")]
    InsufficientStock(String),
    #[error("Cannot change status of {0} away from Received without an approved payment")]
    PaymentNotApproved(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(s: String) -> Self {
        OrderError::ActorCommunicationError(s)
    }
}

impl OrderError {
    /// Recovers the domain error travelling inside a framework error.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Maps stock-ledger failures onto the order's error vocabulary.
    pub fn from_product(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock(name) => OrderError::InsufficientStock(name),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Maps coupon-store failures onto the order's error vocabulary.
    /// A missing coupon surfaces as `Ok(None)` from the lookup, so only
    /// transport-level failures arrive here.
    pub fn from_coupon(e: CouponError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
