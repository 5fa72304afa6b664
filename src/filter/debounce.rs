//! Trailing-edge debouncer
//!
//! Holds at most one pending timer. Scheduling a new payload cancels the
//! pending one and restarts the window; the payload is delivered once the
//! window elapses without another schedule.
//!
//! ```text
//! schedule(a) ──┐
//! schedule(b) ──┼─ cancel(a), restart window
//!               └── window elapses ──► sink(Delivery { ticket, b })
//! ```
//!
//! Timers run as tokio tasks. Every window gets a ticket from a generation
//! counter. The timer checks its ticket and calls the sink while holding
//! the same lock `cancel` takes, so once `schedule` or `cancel` returns no
//! older window can start a delivery. Payloads that were already handed to
//! the sink carry their ticket; receivers that forward them elsewhere
//! (e.g. over a channel) drop them when [`Debouncer::is_current`] says the
//! window was superseded in the meantime.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A debounced payload stamped with the window that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<T> {
    pub ticket: u64,
    pub payload: T,
}

/// Receiver of debounced payloads
pub type Sink<T> = Arc<dyn Fn(Delivery<T>) + Send + Sync>;

/// Single-slot trailing-edge debouncer
pub struct Debouncer<T> {
    name: &'static str,
    delay: Duration,
    runtime: Handle,
    sink: Sink<T>,
    generation: Arc<Mutex<u64>>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(name: &'static str, delay: Duration, runtime: Handle, sink: Sink<T>) -> Self {
        Self {
            name,
            delay,
            runtime,
            sink,
            generation: Arc::new(Mutex::new(0)),
            pending: None,
        }
    }

    /// Restart the window with `payload` as the value to deliver
    pub fn schedule(&mut self, payload: T) {
        if self.cancel() {
            tracing::trace!(debouncer = self.name, "Restarting debounce window");
        }

        let ticket = *self.generation.lock();
        let generation = self.generation.clone();
        let sink = self.sink.clone();
        let delay = self.delay;
        let name = self.name;

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let current = generation.lock();
            if *current != ticket {
                tracing::trace!(debouncer = name, "Dropping superseded payload");
                return;
            }
            tracing::debug!(debouncer = name, ticket, "Delivering debounced payload");
            sink(Delivery { ticket, payload });
        }));
    }

    /// Cancel the pending delivery, returning whether one was outstanding
    ///
    /// Also invalidates the ticket of any delivery already handed out.
    pub fn cancel(&mut self) -> bool {
        *self.generation.lock() += 1;
        match self.pending.take() {
            Some(task) => {
                let outstanding = !task.is_finished();
                task.abort();
                outstanding
            }
            None => false,
        }
    }

    /// Whether a delivery stamped with `ticket` is still the latest window
    pub fn is_current(&self, ticket: u64) -> bool {
        *self.generation.lock() == ticket
    }

    /// Whether a delivery is still waiting for its window to elapse
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        *self.generation.lock() += 1;
        if let Some(task) = self.pending.take() {
            task.abort();
            tracing::trace!(debouncer = self.name, "Cancelled pending delivery on drop");
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("name", &self.name)
            .field("delay", &self.delay)
            .field("pending", &self.pending.as_ref().is_some_and(|t| !t.is_finished()))
            .finish()
    }
}
