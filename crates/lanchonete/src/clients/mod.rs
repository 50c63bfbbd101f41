//! # Entity Clients
//!
//! High-level, domain-specific APIs over the raw store clients. Each
//! wrapper owns a `StoreClient` for its entity and exposes the
//! operations callers actually use (place an order, redeem a coupon,
//! confirm a payment) instead of the generic request vocabulary.
//! Cross-entity rules that need a lookup before a write, like coupon
//! code and CPF uniqueness, live here too.

pub mod macros;

pub mod coupon_client;
pub mod customer_client;
pub mod order_client;
pub mod payment_client;
pub mod product_client;

pub use coupon_client::CouponClient;
pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use payment_client::PaymentClient;
pub use product_client::ProductClient;
