//! Testing utilities for Hark.
//!
//! Listeners that make it easy to assert on what a dispatcher delivered.
//!
//! # Features
//!
//! - [`RecordingListener`]: records every `(id, payload)` pair it receives
//! - [`CountingListener`]: counts invocations
//! - [`OrderRecordingListener`]: writes its label into a shared log, for
//!   asserting on delivery order across several listeners
//! - [`PanickingListener`]: panics on receipt, for asserting on failure
//!   pass-through

use hark_core::Listener;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records every event it receives.
///
/// Clones share the same record, so keep a clone to inspect after handing
/// the original to a builder.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingListener::<&str, u32>::new();
/// let dispatcher = Dispatcher::from_listeners([recorder.clone().shared()]);
///
/// dispatcher.dispatch(&"x", &[1, 2]);
/// assert_eq!(recorder.events(), vec![("x", 1), ("x", 2)]);
/// ```
pub struct RecordingListener<Id, E> {
    events: Arc<Mutex<Vec<(Id, E)>>>,
}

impl<Id: Clone, E: Clone> RecordingListener<Id, E> {
    /// Create a new recording listener.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<(Id, E)> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<Id: Clone, E: Clone> Default for RecordingListener<Id, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, E> Clone for RecordingListener<Id, E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<Id, E> Listener<Id, E> for RecordingListener<Id, E>
where
    Id: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn receive(&self, id: &Id, payload: &E) {
        self.events
            .lock()
            .unwrap()
            .push((id.clone(), payload.clone()));
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingListener::new();
/// builder.add_global_listener(counter.clone());
///
/// // Dispatch...
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingListener {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<Id, E> Listener<Id, E> for CountingListener {
    fn receive(&self, _id: &Id, _payload: &E) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Order Recording Listener
// ============================================================================

/// A shared log of `(label, payload)` entries.
pub type OrderLog<E> = Arc<Mutex<Vec<(usize, E)>>>;

/// A listener that appends `(label, payload)` to a log shared with other
/// listeners.
pub struct OrderRecordingListener<E> {
    label: usize,
    log: OrderLog<E>,
}

impl<E> OrderRecordingListener<E> {
    /// Create a listener writing `label` into `log`.
    pub fn new(label: usize, log: OrderLog<E>) -> Self {
        Self { label, log }
    }
}

impl<Id, E> Listener<Id, E> for OrderRecordingListener<E>
where
    E: Clone + Send + 'static,
{
    fn receive(&self, _id: &Id, payload: &E) {
        self.log.lock().unwrap().push((self.label, payload.clone()));
    }
}

// ============================================================================
// Panicking Listener
// ============================================================================

/// A listener that panics with a fixed message whenever it is invoked.
#[derive(Debug, Clone, Copy)]
pub struct PanickingListener {
    message: &'static str,
}

impl PanickingListener {
    /// Create a listener that panics with `message`.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<Id, E> Listener<Id, E> for PanickingListener {
    fn receive(&self, _id: &Id, _payload: &E) {
        panic!("{}", self.message);
    }
}
