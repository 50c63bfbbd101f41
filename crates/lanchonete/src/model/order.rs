//! Customer orders.
//!
//! Order items snapshot the product name and the line price (unit price
//! times quantity) at creation time, so later catalog changes never
//! affect an existing order's amount.

use crate::model::customer::CustomerId;
use crate::model::product::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Kitchen workflow stages. Orders only leave `Received` once their
/// payment is approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Received,
    InProgress,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Kitchen display priority: most-ready orders first.
    pub fn kitchen_priority(&self) -> u8 {
        match self {
            OrderStatus::Ready => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Received => 3,
            OrderStatus::Completed => u8::MAX,
        }
    }
}

/// One priced line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Product name snapshotted at order time.
    pub name: String,
    /// Line price: unit price x quantity at order time.
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// None for anonymous/guest orders.
    pub customer_id: Option<CustomerId>,
    pub coupon_code: Option<String>,
    pub items: Vec<OrderItem>,
    /// Sum of line prices minus any coupon discount, never negative.
    pub amount: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Sum of line prices before any coupon discount.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// A requested line: which product, how many.
#[derive(Debug, Clone, Copy)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: Option<CustomerId>,
    pub coupon_code: Option<String>,
    pub lines: Vec<OrderLine>,
}

/// Order mutations. Status is the only mutable field; the transition is
/// validated against the payment gate in the order actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrderUpdate {
    SetStatus(OrderStatus),
}
