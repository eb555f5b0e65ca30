//! HashMap-backed matcher snapshot.

use hark_core::{EventId, Matcher, SharedListener};
use std::{collections::HashMap, fmt};

/// An immutable snapshot of listener registrations.
///
/// Produced by [`MatcherBuilder::build`]. Owns its own map and vectors; the
/// only thing shared with the builder (or with other snapshots) is the
/// reference-counted listeners themselves.
///
/// [`MatcherBuilder::build`]: crate::matching::MatcherBuilder::build
pub struct MapMatcher<Id, E> {
    pub(crate) selective: HashMap<Id, Vec<SharedListener<Id, E>>>,
    pub(crate) globals: Vec<SharedListener<Id, E>>,
}

impl<Id, E> MapMatcher<Id, E> {
    /// A matcher with no listeners. Every identifier matches nothing.
    pub fn empty() -> Self {
        Self {
            selective: HashMap::new(),
            globals: Vec::new(),
        }
    }

    /// Number of global listeners.
    pub fn global_len(&self) -> usize {
        self.globals.len()
    }

    /// Number of identifiers with at least one selective listener.
    pub fn identifier_count(&self) -> usize {
        self.selective.len()
    }

    /// Returns `true` if no listener of either kind is registered.
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.selective.is_empty()
    }
}

impl<Id, E> Default for MapMatcher<Id, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Id: Clone, E> Clone for MapMatcher<Id, E> {
    fn clone(&self) -> Self {
        Self {
            selective: self.selective.clone(),
            globals: self.globals.clone(),
        }
    }
}

impl<Id, E> fmt::Debug for MapMatcher<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapMatcher")
            .field("globals", &self.globals.len())
            .field("identifiers", &self.selective.len())
            .finish()
    }
}

impl<Id, E> Matcher<Id, E> for MapMatcher<Id, E>
where
    Id: EventId,
    E: 'static,
{
    fn match_id(&self, id: &Id) -> Vec<SharedListener<Id, E>> {
        let specific = self
            .selective
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut matched = Vec::with_capacity(self.globals.len() + specific.len());
        matched.extend_from_slice(&self.globals);
        matched.extend_from_slice(specific);
        matched
    }
}
