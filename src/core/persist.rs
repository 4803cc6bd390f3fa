//! Document persistence with retry-on-contention.
//!
//! The saver owns a search backend and wraps its write path with
//! the precondition check, pre/post-save notifications, and a
//! bounded retry loop with randomized backoff. Multiple processes
//! may race to write the same document id; the backend has no
//! locking, so write contention surfaces as transient errors that
//! are worth retrying.

use crate::core::error::{Result, SeekbaseError};
use crate::core::storage::SearchBackend;
use crate::core::types::{DocumentId, IndexDocument};
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Retry policy for backend writes.
///
/// Every write error is treated as transient and retried until
/// the attempt budget runs out; only then is the failure surfaced,
/// with the last cause preserved.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total write attempts, including the first
    pub max_attempts: usize,

    /// Lower bound of the randomized wait between attempts
    pub backoff_min: Duration,

    /// Upper bound of the randomized wait between attempts
    pub backoff_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_min: Duration::from_millis(100),
            backoff_max: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Pick a randomized wait within the configured bounds
    fn backoff(&self) -> Duration {
        let min = self.backoff_min.as_millis() as u64;
        let max = self.backoff_max.as_millis() as u64;
        if max <= min {
            return self.backoff_min;
        }
        let wait_ms = rand::thread_rng().gen_range(min..=max);
        Duration::from_millis(wait_ms)
    }
}

/// Fire-and-forget observer of save events. Return values are
/// never consumed; listeners must not fail the save.
pub trait IndexEventListener: Send + Sync {
    fn pre_save(&self, _document: &IndexDocument) {}
    fn post_save(&self, _document: &IndexDocument) {}
}

/// Saves index documents through a backend, retrying transient
/// write failures.
pub struct DocumentSaver<B: SearchBackend> {
    backend: B,
    policy: RetryPolicy,
    listeners: Vec<Box<dyn IndexEventListener>>,
}

impl<B: SearchBackend> DocumentSaver<B> {
    pub fn new(backend: B, policy: RetryPolicy) -> Self {
        Self {
            backend,
            policy,
            listeners: Vec::new(),
        }
    }

    /// Register a save-event listener
    pub fn add_listener(&mut self, listener: Box<dyn IndexEventListener>) {
        self.listeners.push(listener);
    }

    /// Persist one document.
    ///
    /// Fails immediately with [`SeekbaseError::MissingDocumentId`]
    /// when the document has no id; the backend is never invoked
    /// in that case. Write failures are retried up to the policy's
    /// attempt budget with a randomized wait per attempt; the
    /// error is re-raised only after the final attempt, wrapped in
    /// [`SeekbaseError::SaveRetriesExhausted`] with the original
    /// cause.
    pub fn save(&mut self, document: &IndexDocument) -> Result<()> {
        let id = document.id.ok_or(SeekbaseError::MissingDocumentId)?;

        for listener in &self.listeners {
            listener.pre_save(document);
        }

        self.write_with_retry(document, &id)?;

        for listener in &self.listeners {
            listener.post_save(document);
        }

        Ok(())
    }

    fn write_with_retry(&mut self, document: &IndexDocument, id: &DocumentId) -> Result<()> {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.backend.save(document) {
                Ok(()) => return Ok(()),
                Err(e) if attempt < max_attempts => {
                    let wait = self.policy.backoff();
                    tracing::warn!(
                        "Unable to finish index write for {} ({}. run) because of '{}'. \
                         Retrying in {}ms ... ({} of {})",
                        id,
                        attempt,
                        e,
                        wait.as_millis(),
                        attempt + 1,
                        max_attempts
                    );
                    thread::sleep(wait);
                }
                Err(e) => {
                    return Err(SeekbaseError::SaveRetriesExhausted {
                        attempts: max_attempts,
                        source: Box::new(e),
                    });
                }
            }
        }

        // the loop either returns Ok or errors on the last attempt
        unreachable!("retry loop exits via return")
    }

    /// Thin backend lookup passthrough
    pub fn get_for_element(&self, id: &DocumentId) -> Result<Option<IndexDocument>> {
        self.backend.get_for_element(id)
    }

    /// Thin backend delete passthrough. Requires an id, like save.
    pub fn delete(&mut self, document: &IndexDocument) -> Result<()> {
        let id = document.id.ok_or(SeekbaseError::MissingDocumentId)?;
        self.backend.delete(&id)
    }

    /// Access the wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the saver, handing the backend back
    pub fn into_backend(self) -> B {
        self.backend
    }
}
