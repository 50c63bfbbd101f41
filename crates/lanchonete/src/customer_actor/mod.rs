//! # Customer Actor
//!
//! Holds registered customers keyed by id, with CPF lookup for the
//! identify-at-the-kiosk flow. CPFs are normalized to bare digits and
//! checked against the official check-digit algorithm before a customer
//! is stored; uniqueness is enforced by
//! [`CustomerClient`](crate::clients::CustomerClient) before creation.

pub mod entity;
pub mod error;

pub use entity::CustomerQuery;
pub use error::*;

use crate::model::Customer;
use store_actor::{StoreActor, StoreClient};

/// Creates a new customer actor and its client.
pub fn new() -> (StoreActor<Customer>, StoreClient<Customer>) {
    StoreActor::new(32)
}
