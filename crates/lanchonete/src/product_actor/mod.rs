//! # Product Actor (Stock Ledger)
//!
//! Owns the product catalog and the authoritative stock counts. Beyond
//! CRUD and category listings it exposes two domain operations:
//!
//! - `CheckStock` - read a single product's available quantity
//! - `PriceAndReserve` - the batch used by order creation: validate,
//!   price and decrement stock for all of an order's lines atomically
//!
//! Because the actor processes one message at a time, concurrent orders
//! against the same product serialize on this store, and the reserve
//! batch can never oversell or leave a partial decrement behind when a
//! later line fails.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::ProductQuery;
pub use error::*;

use crate::model::Product;
use store_actor::{StoreActor, StoreClient};

/// Creates a new product actor and its client.
pub fn new() -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(32)
}
