//! Payment records.
//!
//! One payment per order. Created as `Pending` alongside a QR payload;
//! the payment provider's webhook later overwrites status, description
//! and payment date. The order lifecycle consults this record as the
//! single source of truth before allowing a status transition.

use crate::model::order::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaymentId(pub u32);

impl From<u32> for PaymentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub amount: f64,
    pub status: PaymentStatus,
    pub description: Option<String>,
    /// Payload encoded into the QR code shown at the terminal.
    pub qr_code: String,
    /// Set when the webhook reports a terminal status.
    pub payment_date: Option<DateTime<Utc>>,
}

/// Payload for creating a new (pending) payment.
#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub order_id: OrderId,
    pub amount: f64,
    pub description: Option<String>,
    pub qr_code: String,
}

/// Webhook-driven overwrite of the payment outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUpdate {
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

/// Data encoded into the payment QR code.
pub fn qr_payload(order_id: OrderId, amount: f64) -> String {
    format!("lanchonete|{}|{:.2}", order_id, amount)
}
