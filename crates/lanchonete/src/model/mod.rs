//! Domain data structures.
//!
//! Pure data: entities, ids and DTOs. The [`StoreEntity`](store_actor::StoreEntity)
//! implementations (lifecycle hooks, queries, actions) live in the
//! corresponding `*_actor` modules.

pub mod coupon;
pub mod customer;
pub mod order;
pub mod payment;
pub mod product;

pub use coupon::{Coupon, CouponCreate, CouponId, CouponUpdate};
pub use customer::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
pub use order::{Order, OrderCreate, OrderId, OrderItem, OrderLine, OrderStatus, OrderUpdate};
pub use payment::{qr_payload, Payment, PaymentCreate, PaymentId, PaymentStatus, PaymentUpdate};
pub use product::{Category, Product, ProductCreate, ProductId, ProductUpdate};

use chrono::NaiveDate;

/// Current calendar date, used for coupon expiry checks.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
