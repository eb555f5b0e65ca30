//! # Dispatcher
//!
//! The standard [`EventDispatcher`]: wraps one [`Matcher`] and fans payloads
//! out to whatever it matches.
//!
//! # Ordering
//!
//! The listener set is resolved once per `dispatch` call, before any
//! listener runs. Delivery is payload-major: every matched listener sees the
//! first payload before any listener sees the second.
//!
//! ```text
//! payloads  [p1, p2]      listeners  [L1, L2]
//! delivery  L1(p1) L2(p1) L1(p2) L2(p2)
//! ```
//!
//! # Construction
//!
//! | Constructor | Listeners |
//! |-------------|-----------|
//! | [`Dispatcher::new`] | Whatever the matcher matches |
//! | [`Dispatcher::from_optional`] | `None` yields no listeners |
//! | [`Dispatcher::from_parts`] | Globals plus one selective listener per map entry |
//! | [`Dispatcher::from_listeners`] | Globals only, at least one |
//! | [`Dispatcher::from_fns`] | Closures as globals, at least one |
//! | [`Dispatcher::from_map`] | One selective listener per map entry |

use crate::matching::{MapMatcher, MatcherBuilder};
use hark_core::{
    EventDispatcher, EventId, FnListener, Listener, Matcher, Payload, RegistrationError,
    SharedListener,
};
use std::{fmt, iter, sync::Arc};

/// Fans payloads out to the listeners matched for an identifier.
///
/// Cloning a dispatcher is cheap; clones share the same matcher.
pub struct Dispatcher<Id, E> {
    matcher: Arc<dyn Matcher<Id, E>>,
}

impl<Id, E> Clone for Dispatcher<Id, E> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
        }
    }
}

impl<Id, E> fmt::Debug for Dispatcher<Id, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl<Id: EventId, E: Payload> Default for Dispatcher<Id, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Id: EventId, E: Payload> Dispatcher<Id, E> {
    /// Create a dispatcher over `matcher`.
    pub fn new<M>(matcher: M) -> Self
    where
        M: Matcher<Id, E> + 'static,
    {
        Self {
            matcher: Arc::new(matcher),
        }
    }

    /// Create a dispatcher over `matcher`, or one with no listeners at all
    /// when `matcher` is `None`.
    pub fn from_optional<M>(matcher: Option<M>) -> Self
    where
        M: Matcher<Id, E> + 'static,
    {
        match matcher {
            Some(matcher) => Self::new(matcher),
            None => Self::empty(),
        }
    }

    /// A dispatcher with no listeners. Dispatching to it does nothing.
    pub fn empty() -> Self {
        Self::new(MapMatcher::<Id, E>::empty())
    }

    /// Create a dispatcher from global listeners and per-identifier listeners.
    ///
    /// Every entry of `globals` receives every event. Every `(id, listener)`
    /// entry of `map` becomes a selective registration for that single
    /// identifier. Either may be empty.
    pub fn from_parts<G, M>(globals: G, map: M) -> Self
    where
        G: IntoIterator<Item = SharedListener<Id, E>>,
        M: IntoIterator<Item = (Id, SharedListener<Id, E>)>,
    {
        let mut builder = MatcherBuilder::new();
        for listener in globals {
            builder.add_shared_global_listener(listener);
        }
        for (id, listener) in map {
            builder.add_shared_listener(iter::once(id), listener);
        }
        Self::new(builder.build())
    }

    /// Create a dispatcher whose listeners are all global.
    ///
    /// # Panics
    ///
    /// Panics if `listeners` is empty.
    #[track_caller]
    pub fn from_listeners<I>(listeners: I) -> Self
    where
        I: IntoIterator<Item = SharedListener<Id, E>>,
    {
        match Self::try_from_listeners(listeners) {
            Ok(dispatcher) => dispatcher,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`from_listeners`](Self::from_listeners), returning
    /// [`RegistrationError::NoListeners`] for an empty input.
    pub fn try_from_listeners<I>(listeners: I) -> Result<Self, RegistrationError>
    where
        I: IntoIterator<Item = SharedListener<Id, E>>,
    {
        let globals: Vec<_> = listeners.into_iter().collect();
        if globals.is_empty() {
            return Err(RegistrationError::NoListeners);
        }
        Ok(Self::from_parts(globals, iter::empty()))
    }

    /// Create a dispatcher with a single closure as its only, global listener.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Id, &E) + Send + Sync + 'static,
    {
        Self::from_parts(
            iter::once(FnListener::<Id, E, F>::new(f).shared()),
            iter::empty(),
        )
    }

    /// Create a dispatcher that wraps each closure as a global listener.
    ///
    /// Closures of different types can be passed together as
    /// [`BoxFn`](hark_core::BoxFn)s.
    ///
    /// # Panics
    ///
    /// Panics if `closures` is empty.
    #[track_caller]
    pub fn from_fns<I, F>(closures: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(&Id, &E) + Send + Sync + 'static,
    {
        match Self::try_from_fns(closures) {
            Ok(dispatcher) => dispatcher,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`from_fns`](Self::from_fns), returning
    /// [`RegistrationError::NoClosures`] for an empty input.
    pub fn try_from_fns<I, F>(closures: I) -> Result<Self, RegistrationError>
    where
        I: IntoIterator<Item = F>,
        F: Fn(&Id, &E) + Send + Sync + 'static,
    {
        let globals: Vec<SharedListener<Id, E>> = closures
            .into_iter()
            .map(|f| FnListener::<Id, E, F>::new(f).shared())
            .collect();
        if globals.is_empty() {
            return Err(RegistrationError::NoClosures);
        }
        Ok(Self::from_parts(globals, iter::empty()))
    }

    /// Create a dispatcher where each listener only receives events for the
    /// identifier it is mapped to.
    pub fn from_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (Id, SharedListener<Id, E>)>,
    {
        Self::from_parts(iter::empty(), map)
    }

    /// The matcher this dispatcher resolves listeners with.
    pub fn matcher(&self) -> &dyn Matcher<Id, E> {
        &*self.matcher
    }
}

impl<Id: EventId, E: Payload> EventDispatcher<Id, E> for Dispatcher<Id, E> {
    fn dispatch(&self, id: &Id, payloads: &[E]) {
        let targets = self.matcher.match_id(id);

        let zero;
        let payloads = if payloads.is_empty() {
            zero = [E::default()];
            &zero[..]
        } else {
            payloads
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            listeners = targets.len(),
            payloads = payloads.len(),
            "dispatching event"
        );

        for payload in payloads {
            for target in &targets {
                target.receive(id, payload);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingListener, OrderRecordingListener, RecordingListener};
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct CountingMatcher {
        calls: Arc<AtomicUsize>,
        listener: SharedListener<&'static str, u32>,
    }

    impl Matcher<&'static str, u32> for CountingMatcher {
        fn match_id(&self, _id: &&'static str) -> Vec<SharedListener<&'static str, u32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            vec![self.listener.clone()]
        }
    }

    #[test]
    fn listeners_are_resolved_once_per_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = CountingListener::new();
        let dispatcher = Dispatcher::new(CountingMatcher {
            calls: calls.clone(),
            listener: counter.clone().shared(),
        });

        dispatcher.dispatch(&"x", &[1, 2, 3]);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(counter.count(), 3);

        dispatcher.dispatch_default(&"y");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(counter.count(), 4);
    }

    #[test]
    fn dispatch_without_payload_delivers_default_once() {
        let recorder = RecordingListener::<&str, u32>::new();
        let dispatcher = Dispatcher::from_listeners([recorder.clone().shared()]);

        dispatcher.dispatch_default(&"x");

        assert_eq!(recorder.events(), vec![("x", 0)]);
    }

    #[test]
    fn fan_out_is_payload_major() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::from_listeners([
            OrderRecordingListener::new(1, log.clone()).shared(),
            OrderRecordingListener::new(2, log.clone()).shared(),
        ]);

        dispatcher.dispatch(&"x", &["p1", "p2"]);

        assert_eq!(
            *log.lock().unwrap(),
            vec![(1, "p1"), (2, "p1"), (1, "p2"), (2, "p2")]
        );
    }

    #[test]
    fn none_matcher_dispatches_to_nobody() {
        let dispatcher = Dispatcher::<&str, u32>::from_optional(None::<MapMatcher<&str, u32>>);
        dispatcher.dispatch(&"x", &[1, 2, 3]);
        dispatcher.dispatch_default(&"y");
        assert!(dispatcher.matcher().match_id(&"x").is_empty());
    }

    #[test]
    fn clones_share_the_matcher() {
        let counter = CountingListener::new();
        let dispatcher = Dispatcher::<&str, ()>::from_listeners([counter.clone().shared()]);
        let clone = dispatcher.clone();

        dispatcher.dispatch_default(&"a");
        clone.dispatch_default(&"b");

        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn try_constructors_reject_empty_input() {
        let listeners: Vec<SharedListener<&str, ()>> = Vec::new();
        assert_eq!(
            Dispatcher::try_from_listeners(listeners).err(),
            Some(RegistrationError::NoListeners)
        );

        let closures: Vec<hark_core::BoxFn<&str, ()>> = Vec::new();
        assert!(matches!(
            Dispatcher::try_from_fns(closures),
            Err(RegistrationError::NoClosures)
        ));
    }
}
