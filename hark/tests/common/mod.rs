#![allow(dead_code)]

use hark::{Listener, SharedListener, from_fn};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Event Types
// ============================================================================

pub type Id = &'static str;
pub type Event = String;

// ============================================================================
// Test Listeners
// ============================================================================

/// A listener bumping `counter` on every call.
pub fn counting(counter: &Arc<AtomicUsize>) -> SharedListener<Id, Event> {
    let counter = counter.clone();
    from_fn(move |_id: &Id, _event: &Event| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .shared()
}

pub fn count(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
