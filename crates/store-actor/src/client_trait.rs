//! # EntityClient Trait
//!
//! Common interface for entity-specific client wrappers. Provides default
//! `get`, `delete` and `find` methods on top of the generic
//! [`StoreClient`], so wrappers only implement the operations that need
//! domain-specific payloads or orchestration.

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit standard store operations.
///
/// Implementors supply access to the inner generic client and a mapping
/// from framework errors to the entity's own error type; `get`, `delete`
/// and `find` come for free.
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic store client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the entity-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// List entities matching a query, sorted by ascending id.
    #[tracing::instrument(skip(self, query))]
    async fn find(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(query).await.map_err(Self::map_error)
    }
}
