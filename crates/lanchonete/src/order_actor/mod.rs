//! # Order Actor
//!
//! The heart of the system: places orders and walks them through the
//! kitchen workflow.
//!
//! Placement runs in `on_create` with the product, coupon and payment
//! clients injected as context. The steps, in order: coupon gate
//! (identified customer, code exists, active, unexpired), quantity
//! check, then one atomic price-and-reserve batch against the stock
//! ledger, and finally the discount capped at the coupon maximum and
//! clamped so the amount never goes negative. Item name and price are
//! snapshotted at this point and never change afterwards.
//!
//! Status transitions are payment-gated: an order leaves `Received`
//! only when the payment store reports a `Paid` payment for it.

pub mod entity;
pub mod error;

pub use entity::{OrderContext, OrderQuery};
pub use error::*;

use crate::model::Order;
use store_actor::{StoreActor, StoreClient};

/// Creates a new order actor and its client.
pub fn new() -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(32)
}
