//! Registered customers.
//!
//! Customers identify themselves by CPF at the self-service terminal;
//! authentication itself (JWT, auth proxy) happens outside this core.
//! Orders carry an `Option<CustomerId>` so guests can order too.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Stored as bare digits, checksum-validated on registration.
    pub cpf: String,
    pub active: bool,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub cpf: String,
}

/// Explicit set of mutable customer fields; CPF is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
