//! Builder for listener registrations.

use crate::matching::MapMatcher;
use hark_core::{EventId, Listener, RegistrationError, SharedListener};
use std::{collections::HashMap, fmt, sync::Arc};

/// Accumulates listener registrations and freezes them into [`MapMatcher`]s.
///
/// Two kinds of registration exist:
///
/// - **Global** listeners receive every event, whatever its identifier.
/// - **Selective** listeners receive only events dispatched under one of
///   the identifiers they were registered for.
///
/// Registrations only ever accumulate. [`build`](Self::build) may be called
/// any number of times; each call returns a snapshot of the registrations
/// made so far that is unaffected by anything the builder does later.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = MatcherBuilder::new();
/// builder
///     .add_global_listener(LoggingListener)
///     .add_listener(["user.login", "user.logout"], audit);
/// let matcher = builder.build();
/// ```
pub struct MatcherBuilder<Id, E> {
    selective: HashMap<Id, Vec<SharedListener<Id, E>>>,
    globals: Vec<SharedListener<Id, E>>,
}

impl<Id, E> Default for MatcherBuilder<Id, E> {
    fn default() -> Self {
        Self {
            selective: HashMap::new(),
            globals: Vec::new(),
        }
    }
}

impl<Id, E> fmt::Debug for MatcherBuilder<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherBuilder")
            .field("globals", &self.globals.len())
            .field("identifiers", &self.selective.len())
            .finish()
    }
}

impl<Id, E> MatcherBuilder<Id, E>
where
    Id: EventId,
    E: 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every identifier.
    pub fn add_global_listener<L>(&mut self, listener: L) -> &mut Self
    where
        L: Listener<Id, E>,
    {
        self.add_shared_global_listener(Arc::new(listener))
    }

    /// Register an already shared listener for every identifier.
    pub fn add_shared_global_listener(&mut self, listener: SharedListener<Id, E>) -> &mut Self {
        self.globals.push(listener);
        self
    }

    /// Register a listener for each identifier in `ids`.
    ///
    /// An identifier listed twice gets the listener twice.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty: such a registration could never fire.
    /// Use [`try_add_listener`](Self::try_add_listener) to get the error
    /// as a value instead.
    #[track_caller]
    pub fn add_listener<I, L>(&mut self, ids: I, listener: L) -> &mut Self
    where
        I: IntoIterator<Item = Id>,
        L: Listener<Id, E>,
    {
        self.add_shared_listener(ids, Arc::new(listener))
    }

    /// Shared-listener form of [`add_listener`](Self::add_listener).
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty.
    #[track_caller]
    pub fn add_shared_listener<I>(&mut self, ids: I, listener: SharedListener<Id, E>) -> &mut Self
    where
        I: IntoIterator<Item = Id>,
    {
        match self.try_add_shared_listener(ids, listener) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Register a listener for each identifier in `ids`, rejecting an empty
    /// identifier list with [`RegistrationError::EmptyIdentifiers`].
    ///
    /// On error the builder is left unchanged.
    pub fn try_add_listener<I, L>(
        &mut self,
        ids: I,
        listener: L,
    ) -> Result<&mut Self, RegistrationError>
    where
        I: IntoIterator<Item = Id>,
        L: Listener<Id, E>,
    {
        self.try_add_shared_listener(ids, Arc::new(listener))
    }

    /// Shared-listener form of [`try_add_listener`](Self::try_add_listener).
    pub fn try_add_shared_listener<I>(
        &mut self,
        ids: I,
        listener: SharedListener<Id, E>,
    ) -> Result<&mut Self, RegistrationError>
    where
        I: IntoIterator<Item = Id>,
    {
        let mut ids = ids.into_iter().peekable();
        if ids.peek().is_none() {
            return Err(RegistrationError::EmptyIdentifiers);
        }

        for id in ids {
            self.selective
                .entry(id)
                .or_default()
                .push(Arc::clone(&listener));
        }
        Ok(self)
    }

    /// Number of global registrations.
    pub fn global_len(&self) -> usize {
        self.globals.len()
    }

    /// Total number of registrations, global and selective.
    pub fn len(&self) -> usize {
        self.globals.len() + self.selective.values().map(Vec::len).sum::<usize>()
    }

    /// Returns `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.selective.is_empty()
    }

    /// Snapshot the current registrations.
    ///
    /// The returned matcher owns fresh copies of the registration map and of
    /// every listener vector.
    pub fn build(&self) -> MapMatcher<Id, E> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            globals = self.globals.len(),
            identifiers = self.selective.len(),
            "building matcher snapshot"
        );

        MapMatcher {
            selective: self.selective.clone(),
            globals: self.globals.clone(),
        }
    }
}
