//! Trailing-edge debounce
//!
//! Collapses a burst of calls into a single invocation that runs once the
//! quiescence window has passed since the *last* call. A call that has
//! already started running is never cancelled by a later trigger.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Default quiescence window for search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Debouncer backed by tokio timers
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
    fired: Arc<AtomicU64>,
    last: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
            fired: Arc::new(AtomicU64::new(0)),
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `f`, superseding any call still waiting out its window
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let fired = Arc::clone(&self.fired);
        let deadline = Instant::now() + self.window;

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if generation.load(Ordering::SeqCst) != ticket {
                trace!("Debounced call {} superseded", ticket);
                return;
            }
            fired.store(ticket, Ordering::SeqCst);
            f().await;
        });

        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    /// True while the most recent call is still waiting out its window
    pub fn is_pending(&self) -> bool {
        self.fired.load(Ordering::SeqCst) != self.generation.load(Ordering::SeqCst)
    }

    /// Wait for the most recently scheduled call to finish
    pub async fn settle(&self) {
        let handle = self
            .last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            // A panicking callback is not the caller's concern here
            let _ = handle.await;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
