//! # Coupon Actor
//!
//! Owns discount coupons and their validation rules: code format (no
//! whitespace, at most 20 chars), percentage in (0, 100], non-negative
//! cap, and a non-past expiry at creation/update time. Code uniqueness
//! is checked by [`CouponClient`](crate::clients::CouponClient) against
//! the store before creating or renaming.
//!
//! The customer-facing `RedeemableOn` listing filters out inactive and
//! expired coupons and hides VIP coupons from non-associated customers;
//! the administrative `All` listing bypasses the filter.

pub mod entity;
pub mod error;

pub use entity::{validate_code, validate_discount, validate_expiry, CouponAction, CouponQuery};
pub use error::*;

use crate::model::Coupon;
use store_actor::{StoreActor, StoreClient};

/// Creates a new coupon actor and its client.
pub fn new() -> (StoreActor<Coupon>, StoreClient<Coupon>) {
    StoreActor::new(32)
}
