//! # StoreEntity Trait
//!
//! Contract that every stored resource must implement to be managed by a
//! [`StoreActor`](crate::StoreActor). Associated types pin down the DTOs,
//! queries, actions and errors of the resource, so a `Product` store can
//! never be sent a `Coupon` payload. Lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`, `handle_action`) carry the business logic;
//! the actor loop stays generic and is written once.
//!
//! # Error granularity
//! The framework enforces one error enum per entity rather than one per
//! message. `ProductError` is the union of everything the product store
//! can fail with; clients pattern-match a single type.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `StoreActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so entities can call other stores' clients
/// while handling a request. The `Context` associated type holds those
/// dependencies and is injected into every hook ("late binding": clients
/// are passed to `run()`, not to the constructor).
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be convertible from `u32` (the actor
    /// generates ids from an internal counter) and totally ordered so
    /// listings are deterministic.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload describing a mutation of an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter understood by [`StoreEntity::matches`]; drives `Find` requests.
    type Query: Send + Sync + Debug;

    /// Entity-specific operation targeting a single row (e.g. `CheckStock`).
    type Action: Send + Sync + Debug;

    /// Result type returned by [`StoreEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Store-wide operation applied atomically inside one actor message.
    /// Entities without batch operations use an empty enum here.
    type Batch: Send + Sync + Debug;

    /// Result type returned by [`StoreEntity::apply_batch`].
    type BatchResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle hooks ---

    /// Called after construction, before the entity is inserted into the
    /// store. A failure here discards the entity; nothing is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom single-row action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Store-level operations ---

    /// Predicate used by `Find` requests to filter the store.
    fn matches(&self, query: &Self::Query) -> bool;

    /// Apply a store-wide batch operation.
    ///
    /// Runs synchronously inside the actor loop with exclusive access to
    /// the whole store map. Implementations must validate everything
    /// before mutating anything so that a failure leaves the store
    /// untouched.
    fn apply_batch(
        store: &mut HashMap<Self::Id, Self>,
        batch: Self::Batch,
        ctx: &Self::Context,
    ) -> Result<Self::BatchResult, Self::Error>;
}
