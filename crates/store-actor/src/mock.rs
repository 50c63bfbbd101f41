//! # Mock Clients for Testing
//!
//! The [`MockClient`] type hands out real [`StoreClient`]s whose requests
//! are answered by scripted expectations instead of a running actor. This
//! keeps unit tests for client wrappers fast and fully deterministic, and
//! makes failure injection trivial (`return_err`).
//!
//! Three testing patterns are supported:
//!
//! 1. **Pure mock** - test a client wrapper's orchestration logic with
//!    every dependency scripted via [`MockClient`].
//! 2. **Actor with mocked dependencies** - spawn the real actor under
//!    test, inject mock clients as its context. See the order actor tests
//!    in the application crate.
//! 3. **Full system** - spawn everything, drive end-to-end flows.
//!
//! For asserting on the raw request stream (payload contents, ordering),
//! use [`create_mock_client`] plus the `expect_*` channel helpers.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and its scripted response.
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
    Find {
        response: Result<Vec<T>, StoreError>,
    },
    Action {
        response: Result<T::ActionResult, StoreError>,
    },
    Batch {
        response: Result<T::BatchResult, StoreError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<Coupon>::new();
/// mock.expect_find().return_ok(vec![coupon]);
///
/// let client = CouponClient::new(mock.client());
/// // drive the code under test...
/// mock.verify(); // all expectations consumed
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering requests from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Batch { respond_to, .. },
                        Some(Expectation::Batch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get {
            response,
        })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Update {
            response,
        })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Delete {
            response,
        })
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Find {
            response,
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Action {
            response,
        })
    }

    /// Expects a `batch` operation.
    pub fn expect_batch(&mut self) -> ExpectationBuilder<T, T::BatchResult> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Batch {
            response,
        })
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder tying a scripted response to an expectation slot.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Scripts a successful response.
    pub fn return_ok(self, value: R) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Ok(value)));
    }

    /// Scripts an error response.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and the receiver carrying its raw requests.
///
/// Useful when a test needs to assert on request payloads or ordering
/// rather than just scripting responses; the test plays the actor's role
/// by receiving requests and answering their oneshot channels.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Receives the next message and asserts it is a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is a Get request.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is a Find request.
pub async fn expect_find<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Query,
    tokio::sync::oneshot::Sender<Result<Vec<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is an Action request.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is a Batch request.
pub async fn expect_batch<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Batch,
    tokio::sync::oneshot::Sender<Result<T::BatchResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Batch { batch, respond_to }) => Some((batch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StoreEntity;
    use async_trait::async_trait;
    use std::collections::HashMap;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate;

    #[derive(Debug)]
    enum ShelfQuery {
        All,
    }

    #[derive(Debug)]
    enum ShelfAction {}

    #[derive(Debug)]
    enum ShelfBatch {}

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl StoreEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Query = ShelfQuery;
        type Action = ShelfAction;
        type ActionResult = ();
        type Batch = ShelfBatch;
        type BatchResult = ();
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<(), Self::Error> {
            match action {}
        }

        fn matches(&self, query: &ShelfQuery) -> bool {
            match query {
                ShelfQuery::All => true,
            }
        }

        fn apply_batch(
            _store: &mut HashMap<u32, Self>,
            batch: ShelfBatch,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            match batch {}
        }
    }

    #[tokio::test]
    async fn mock_client_answers_raw_create() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ShelfCreate {
                    label: "Top".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "Top");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get().return_ok(Some(Shelf {
            id: 1,
            label: "Top".to_string(),
        }));
        mock.expect_find().return_ok(vec![]);

        let client = mock.client();

        let id = client
            .create(ShelfCreate {
                label: "Top".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "Top");

        let listed = client.find(ShelfQuery::All).await.unwrap();
        assert!(listed.is_empty());

        mock.verify();
    }
}
