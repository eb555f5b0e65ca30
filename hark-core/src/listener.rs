//! # Listener
//!
//! A Listener is the receiving end of a dispatch. It is handed the
//! identifier an event was dispatched under and one payload, and does
//! whatever it likes with them. It returns nothing.
//!
//! # Failure
//!
//! Listeners have no error channel. A listener that panics unwinds straight
//! through the dispatcher: the remaining listeners and payloads of that
//! dispatch call are skipped and the panic reaches the caller of
//! `dispatch`. Nothing in Hark catches or wraps it. Listeners that must not
//! interrupt their siblings should handle their own failures internally.
//!
//! # Sharing
//!
//! Registrations store listeners as [`SharedListener`] (`Arc<dyn Listener>`),
//! so one listener value can be registered under many identifiers and
//! survive into many matcher snapshots without being cloned.

use std::{marker::PhantomData, sync::Arc};

/// A type-erased, reference-counted listener.
pub type SharedListener<Id, E> = Arc<dyn Listener<Id, E>>;

/// A boxed listener closure, for passing closures of different types together.
pub type BoxFn<Id, E> = Box<dyn Fn(&Id, &E) + Send + Sync>;

/// Receives events and executes the corresponding logic.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for identifiers `{Id}` and payloads `{E}`",
    label = "missing `Listener` implementation",
    note = "Listeners must implement `receive(&self, &{Id}, &{E})`, or wrap a closure with `hark::from_fn`."
)]
pub trait Listener<Id, E>: Send + Sync + 'static {
    /// Called once per matched payload.
    fn receive(&self, id: &Id, payload: &E);

    /// Only forwards events for which `predicate` returns `true`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Id, &E) -> bool + Send + Sync + 'static,
    {
        Filter {
            listener: self,
            predicate,
        }
    }

    /// Erases and shares the listener.
    fn shared(self) -> SharedListener<Id, E>
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

impl<Id, E, L> Listener<Id, E> for Arc<L>
where
    L: Listener<Id, E> + ?Sized,
{
    fn receive(&self, id: &Id, payload: &E) {
        (**self).receive(id, payload);
    }
}

impl<Id, E, L> Listener<Id, E> for Box<L>
where
    L: Listener<Id, E> + ?Sized,
{
    fn receive(&self, id: &Id, payload: &E) {
        (**self).receive(id, payload);
    }
}

/// Adapter turning a plain closure into a [`Listener`].
pub struct FnListener<Id, E, F> {
    f: F,
    _phantom: PhantomData<fn(&Id, &E)>,
}

impl<Id, E, F> FnListener<Id, E, F>
where
    F: Fn(&Id, &E),
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<Id, E, F> Listener<Id, E> for FnListener<Id, E, F>
where
    Id: 'static,
    E: 'static,
    F: Fn(&Id, &E) + Send + Sync + 'static,
{
    fn receive(&self, id: &Id, payload: &E) {
        (self.f)(id, payload);
    }
}

/// Creates a listener from a closure.
///
/// # Example
///
/// ```rust,ignore
/// let listener = hark::from_fn(|id: &&str, payload: &u32| {
///     println!("{id}: {payload}");
/// });
/// ```
pub const fn from_fn<Id, E, F>(f: F) -> FnListener<Id, E, F>
where
    F: Fn(&Id, &E),
{
    FnListener::new(f)
}

/// A listener that does nothing.
///
/// Useful as a placeholder registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<Id, E> Listener<Id, E> for NoopListener {
    fn receive(&self, _id: &Id, _payload: &E) {}
}

/// Creates a listener that does nothing.
pub const fn zero() -> NoopListener {
    NoopListener
}

/// A listener gated by a predicate. See [`Listener::filter`].
pub struct Filter<L, F> {
    listener: L,
    predicate: F,
}

impl<Id, E, L, F> Listener<Id, E> for Filter<L, F>
where
    L: Listener<Id, E>,
    F: Fn(&Id, &E) -> bool + Send + Sync + 'static,
{
    fn receive(&self, id: &Id, payload: &E) {
        if (self.predicate)(id, payload) {
            self.listener.receive(id, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn fn_listener_forwards_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener = from_fn(move |id: &&'static str, payload: &u32| {
            sink.lock().unwrap().push((*id, *payload));
        });

        listener.receive(&"a", &1);
        listener.receive(&"b", &2);

        assert_eq!(*seen.lock().unwrap(), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn filter_skips_rejected_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener = from_fn(move |_id: &&'static str, payload: &u32| {
            sink.lock().unwrap().push(*payload);
        })
        .filter(|_id: &&'static str, payload: &u32| payload % 2 == 0);

        for n in 0..5 {
            listener.receive(&"n", &n);
        }

        assert_eq!(*seen.lock().unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn shared_listener_is_still_a_listener() {
        let seen = Arc::new(Mutex::new(0));
        let sink = seen.clone();
        let shared: SharedListener<&str, u32> = from_fn(move |_id: &&'static str, payload: &u32| {
            *sink.lock().unwrap() += *payload;
        })
        .shared();

        shared.receive(&"x", &3);
        let boxed: Box<dyn Listener<&str, u32>> = Box::new(shared.clone());
        boxed.receive(&"x", &4);

        assert_eq!(*seen.lock().unwrap(), 7);
    }

    #[test]
    fn noop_listener_accepts_anything() {
        let listener = NoopListener;
        Listener::<&str, String>::receive(&listener, &"x", &String::new());
        Listener::<u8, ()>::receive(&listener, &0, &());
    }

    #[test]
    fn zero_listener_can_be_shared_and_invoked() {
        let shared: SharedListener<&str, u32> = zero().shared();
        shared.receive(&"x", &1);
        assert_eq!(Arc::strong_count(&shared), 1);
    }
}
