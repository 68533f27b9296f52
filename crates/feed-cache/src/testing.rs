//! Test double for [`FeedStore`]
//!
//! [`FeedStoreSpy`] records every operation it receives and answers with stubbed
//! results. An operation can also be held until the test releases it, which is how
//! tests observe a loader that is dropped while a store call is in flight.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::{
    model::{LocalFeedImage, RetrievedFeed},
    storage::FeedStore,
    CacheError, Result,
};

/// Operation received by the spy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivedMessage {
    DeleteCachedFeed,
    Insert(Vec<LocalFeedImage>, DateTime<Utc>),
    Retrieve,
}

/// Recording store with stubbed results
#[derive(Debug)]
pub struct FeedStoreSpy {
    messages: Mutex<Vec<ReceivedMessage>>,
    deletion_error: Mutex<Option<String>>,
    insertion_error: Mutex<Option<String>>,
    retrieval: Mutex<std::result::Result<RetrievedFeed, String>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl Default for FeedStoreSpy {
    fn default() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            deletion_error: Mutex::new(None),
            insertion_error: Mutex::new(None),
            retrieval: Mutex::new(Ok(RetrievedFeed::Empty)),
            gate: Mutex::new(None),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FeedStoreSpy {
    /// Create a spy whose operations all succeed and whose store is empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations received so far, in order
    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        lock(&self.messages).clone()
    }

    /// Make deletions fail with a [`CacheError::Store`] carrying `message`
    pub fn stub_deletion_error(&self, message: impl Into<String>) {
        *lock(&self.deletion_error) = Some(message.into());
    }

    /// Make insertions fail with a [`CacheError::Store`] carrying `message`
    pub fn stub_insertion_error(&self, message: impl Into<String>) {
        *lock(&self.insertion_error) = Some(message.into());
    }

    /// Make retrievals fail with a [`CacheError::Store`] carrying `message`
    pub fn stub_retrieval_error(&self, message: impl Into<String>) {
        *lock(&self.retrieval) = Err(message.into());
    }

    /// Make retrievals succeed with `retrieved`
    pub fn stub_retrieval(&self, retrieved: RetrievedFeed) {
        *lock(&self.retrieval) = Ok(retrieved);
    }

    /// Hold the next operation until the returned sender fires or is dropped
    pub fn hold_next_operation(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *lock(&self.gate) = Some(gate);
        release
    }

    async fn record(&self, message: ReceivedMessage) {
        lock(&self.messages).push(message);

        let gate = lock(&self.gate).take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl FeedStore for FeedStoreSpy {
    async fn delete_cached_feed(&self) -> Result<()> {
        self.record(ReceivedMessage::DeleteCachedFeed).await;

        match lock(&self.deletion_error).clone() {
            Some(message) => Err(CacheError::store(message)),
            None => Ok(()),
        }
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<()> {
        self.record(ReceivedMessage::Insert(feed, timestamp)).await;

        match lock(&self.insertion_error).clone() {
            Some(message) => Err(CacheError::store(message)),
            None => Ok(()),
        }
    }

    async fn retrieve(&self) -> Result<RetrievedFeed> {
        self.record(ReceivedMessage::Retrieve).await;

        lock(&self.retrieval).clone().map_err(CacheError::store)
    }
}
