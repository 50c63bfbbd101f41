//! # Store Actor Framework
//!
//! Generic building blocks for type-safe, actor-backed entity stores.
//! Each entity type (Product, Coupon, Order, ...) gets its own actor that
//! owns an in-memory store and processes requests sequentially over a
//! Tokio channel, giving exclusive access to the state without locks.
//!
//! The framework separates three layers:
//!
//! 1. **Entity layer** ([`StoreEntity`]) - domain data and business rules
//! 2. **Runtime layer** ([`StoreActor`]) - message processing and state ownership
//! 3. **Interface layer** ([`StoreClient`]) - type-safe, cloneable request API
//!
//! ## Request vocabulary
//!
//! Every store speaks the same request language ([`StoreRequest`]):
//!
//! - **Create / Get / Update / Delete** - the standard resource lifecycle
//! - **Find** - filtered listing; the entity defines a `Query` type and a
//!   [`StoreEntity::matches`] predicate, results come back sorted by id
//! - **Action** - an entity-specific operation targeting a single row
//!   (e.g. checking a product's stock level)
//! - **Batch** - an entity-defined operation applied to the *whole* store
//!   inside one message. Because an actor handles one message at a time
//!   and [`StoreEntity::apply_batch`] contains no await points, a batch is
//!   an atomic all-or-nothing unit. This is the transactional boundary
//!   for multi-row read-modify-write flows such as reserving stock for
//!   every line of an order.
//!
//! ## Context injection
//!
//! Dependencies (usually clients of other stores) are injected at runtime
//! via [`StoreActor::run`], not at construction time. Actors are created
//! first without dependencies, then wired together when spawned, which
//! keeps the dependency graph acyclic and easy to reason about.
//!
//! ```rust,ignore
//! let (product_actor, product_client) = StoreActor::<Product>::new(32);
//! let (order_actor, order_client) = StoreActor::<Order>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! // the order store validates coupons and reserves stock during creation
//! tokio::spawn(order_actor.run((product_client.clone(), coupon_client.clone())));
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient<T>` with the same API as the
//! real client but driven by scripted expectations, so client wrappers can
//! be unit-tested without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
