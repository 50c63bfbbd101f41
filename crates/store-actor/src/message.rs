//! # Store Messages
//!
//! Generic message types exchanged between a [`StoreClient`](crate::StoreClient)
//! and its [`StoreActor`](crate::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request vocabulary understood by every store actor.
///
/// The variants map to the standard resource lifecycle (Create, Get,
/// Update, Delete) plus three extensions:
///
/// - `Find` - filtered listing via the entity's `Query` type
/// - `Action` - single-row entity-specific operation
/// - `Batch` - store-wide operation processed atomically in one message;
///   this is the transactional unit for multi-row workflows
///
/// The enum is generic over `T: StoreEntity` and uses its associated
/// types, so a payload for one entity type can never reach another
/// entity's actor.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Find {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Batch {
        batch: T::Batch,
        respond_to: Response<T::BatchResult>,
    },
}
