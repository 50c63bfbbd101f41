//! Discount coupons.
//!
//! A coupon is identified by a short human-entered code, applies a
//! percentage discount capped at an absolute amount, and is valid through
//! its expiration date (inclusive). VIP coupons are additionally
//! restricted to customers with an explicit redemption association; that
//! restriction is enforced when listing redeemable coupons, not at order
//! time.

use crate::model::customer::CustomerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CouponId(pub u32);

impl From<u32> for CouponId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CouponId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coupon_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    /// Unique human-entered redemption code: non-empty, no whitespace,
    /// at most 20 characters.
    pub code: String,
    pub description: Option<String>,
    /// Percentage in (0, 100].
    pub discount_percentage: f64,
    /// Absolute cap on the discount amount, >= 0.
    pub max_discount: f64,
    /// Last day the coupon can be redeemed.
    pub expires_at: NaiveDate,
    pub active: bool,
    /// Restricts redemption listings to associated customers.
    pub vip: bool,
    /// Customers explicitly allowed to see this coupon when it is VIP.
    pub customers: Vec<CustomerId>,
}

impl Coupon {
    /// Active and not expired on `date`; expiry is inclusive.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.active && self.expires_at >= date
    }

    /// Whether the coupon shows up in `customer`'s redeemable listing.
    pub fn redeemable_by(&self, on: NaiveDate, customer: Option<CustomerId>) -> bool {
        self.is_valid_on(on) && (!self.vip || customer.is_some_and(|c| self.customers.contains(&c)))
    }

    /// Discount amount for a given order subtotal.
    pub fn discount_for(&self, subtotal: f64) -> f64 {
        (subtotal * self.discount_percentage / 100.0).min(self.max_discount)
    }
}

/// Payload for creating a new coupon.
#[derive(Debug, Clone)]
pub struct CouponCreate {
    pub code: String,
    pub description: Option<String>,
    pub discount_percentage: f64,
    pub max_discount: f64,
    pub expires_at: NaiveDate,
    pub active: bool,
    pub vip: bool,
}

/// Explicit set of mutable coupon fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub code: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<f64>,
    pub max_discount: Option<f64>,
    pub expires_at: Option<NaiveDate>,
    pub active: Option<bool>,
    pub vip: Option<bool>,
}
