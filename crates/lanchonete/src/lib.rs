//! # Lanchonete Ordering Backend
//!
//! Self-service fast-food ordering core built on the [`store_actor`]
//! framework. Customers browse products, redeem coupons, place orders and
//! track payment status; the kitchen works from a priority-sorted queue.
//!
//! ## Modules
//!
//! - [`model`] - domain data: products, coupons, orders, payments, customers
//! - [`product_actor`] - product catalog and stock ledger, including the
//!   atomic price-and-reserve batch used during order creation
//! - [`coupon_actor`] - coupon store with validation and redemption rules
//! - [`order_actor`] - order store; pricing workflow in `on_create`,
//!   payment-gated status transitions in `on_update`
//! - [`payment_actor`] - payment records updated by the payment webhook
//! - [`customer_actor`] - registered customers, identified by CPF
//! - [`clients`] - typed client wrappers over the generic store clients
//! - [`lifecycle`] - system orchestration (actor wiring and shutdown)
//! - [`cpf`] - CPF check-digit validation

pub mod clients;
pub mod coupon_actor;
pub mod cpf;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment_actor;
pub mod product_actor;
