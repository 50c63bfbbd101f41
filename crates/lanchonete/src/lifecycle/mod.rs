//! # System Lifecycle & Orchestration
//!
//! Wires the five stores together and manages their runtime lifecycle.
//! Actors are created without dependencies and receive them at `run()`
//! time, so the order actor can depend on the product, coupon and
//! payment clients without circular references at construction.
//!
//! Shutdown drops every client the system holds; each actor detects its
//! closed channel and exits. The dependency graph is acyclic (only the
//! order actor holds other clients, in its context), so channel closure
//! propagates and every task terminates.

pub mod order_system;

pub use order_system::*;
