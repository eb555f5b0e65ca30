//! # Matcher
//!
//! A Matcher answers one question: which listeners should receive events
//! dispatched under a given identifier, and in what order.
//!
//! Matchers are read-only. Anything that needs to change which listeners
//! apply builds a new matcher instead of mutating one in place, which is what
//! makes a matcher safe to query from any number of threads at once.

use crate::listener::SharedListener;
use std::{collections::HashMap, sync::Arc};

/// Shorthand for one listener per identifier.
pub type ListenerMap<Id, E> = HashMap<Id, SharedListener<Id, E>>;

/// Resolves an identifier to the ordered listeners that apply to it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot match listeners for identifiers `{Id}`",
    label = "missing `Matcher` implementation",
    note = "Implement `Matcher<{Id}, {E}>`, or build one with `MatcherBuilder`."
)]
pub trait Matcher<Id, E>: Send + Sync {
    /// Returns the listeners for `id`, in invocation order.
    ///
    /// The returned vector belongs to the caller. Implementations must hand
    /// out a fresh vector on every call so callers cannot reach their
    /// internal state through it.
    fn match_id(&self, id: &Id) -> Vec<SharedListener<Id, E>>;
}

impl<Id, E, M> Matcher<Id, E> for Arc<M>
where
    M: Matcher<Id, E> + ?Sized,
{
    fn match_id(&self, id: &Id) -> Vec<SharedListener<Id, E>> {
        (**self).match_id(id)
    }
}

impl<Id, E, M> Matcher<Id, E> for Box<M>
where
    M: Matcher<Id, E> + ?Sized,
{
    fn match_id(&self, id: &Id) -> Vec<SharedListener<Id, E>> {
        (**self).match_id(id)
    }
}
