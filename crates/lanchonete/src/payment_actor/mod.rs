//! # Payment Actor
//!
//! Records one payment intent per checkout attempt. A payment is born
//! `Pending` with a QR payload and no payment date; the provider's
//! webhook later overwrites status, description and timestamp through a
//! regular update. Orders consult this store (via `ByOrder`) before
//! leaving the `Received` status.

pub mod entity;
pub mod error;

pub use entity::PaymentQuery;
pub use error::*;

use crate::model::Payment;
use store_actor::{StoreActor, StoreClient};

/// Creates a new payment actor and its client.
pub fn new() -> (StoreActor<Payment>, StoreClient<Payment>) {
    StoreActor::new(32)
}
