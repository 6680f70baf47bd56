//! # Mock Clients
//!
//! `MockClient<T>` hands out a real [`CollectionClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. Use it to test an actor whose
//! hooks call other collections without spawning those collections or touching disk.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **Speed** | In-memory | Spawns a task, writes files |
//! | **State** | Scripted responses | Real records |
//! | **Error injection** | `return_err` | Needs a broken file system |
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong kind or wrong key) panics inside the mock task, and the caller sees
//! `FrameworkError::ActorDropped`.
//!
//! ```rust
//! use collection_actor::mock::MockClient;
//! use collection_actor::{CollectionEntity, FrameworkError};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Bean { id: String, grams: f64 }
//! #[derive(Debug, thiserror::Error)] #[error("bean error")] struct BeanError;
//!
//! #[async_trait]
//! impl CollectionEntity for Bean {
//!     type Id = String; type Create = Bean; type Update = f64;
//!     type Action = Infallible; type ActionResult = ();
//!     type Command = Infallible; type CommandResult = ();
//!     type Context = (); type Error = BeanError;
//!
//!     fn id(&self) -> &String { &self.id }
//!     fn requested_id(params: &Bean) -> Option<String> { Some(params.id.clone()) }
//!     fn from_create_params(_: String, params: Bean) -> Result<Self, BeanError> { Ok(params) }
//!     async fn on_update(&mut self, grams: f64, _: &()) -> Result<(), BeanError> { self.grams = grams; Ok(()) }
//!     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), BeanError> { match a {} }
//!     async fn handle_command(_: &mut Vec<Self>, c: Infallible, _: &()) -> Result<(), BeanError> { match c {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Bean>::new();
//!     mock.expect_get("arabica".to_string())
//!         .return_ok(Some(Bean { id: "arabica".into(), grams: 250.0 }));
//!     mock.expect_get("robusta".to_string())
//!         .return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let bean = client.get("arabica".to_string()).await.unwrap().unwrap();
//!     assert_eq!(bean.grams, 250.0);
//!     assert!(matches!(
//!         client.get("robusta".to_string()).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the exact payload a client sends, use [`create_mock_client`] with
//! [`expect_command`] or [`expect_create`] and answer through the returned responder.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::{CollectionRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: CollectionEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Command {
        response: Result<T::CommandResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: CollectionEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking.
pub struct MockClient<T: CollectionEntity> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CollectionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action called with an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    pub fn expect_command(&mut self) -> ExpectationBuilder<T, T::CommandResult> {
        self.builder(|response| Expectation::Command { response })
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Finishes an expectation with the response the mock will send.
pub struct ExpectationBuilder<T: CollectionEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: CollectionEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver.
///
/// Lets a test inspect the exact payload a wrapper client sends and answer it by hand.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Command.
pub async fn expect_command<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Command, Response<T::CommandResult>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}
