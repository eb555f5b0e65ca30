//! Dispatcher core trait.

use std::slice;

/// Invokes the listeners relevant to an identifier with a set of payloads.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch `{E}` payloads under `{Id}` identifiers",
    label = "missing `EventDispatcher` implementation",
    note = "Implement `EventDispatcher<{Id}, {E}>` to handle event dispatching."
)]
pub trait EventDispatcher<Id, E>: Send + Sync {
    /// Delivers every payload to every listener matched for `id`.
    ///
    /// An empty `payloads` slice delivers a single default payload, so a
    /// bare dispatch still reaches each listener exactly once.
    fn dispatch(&self, id: &Id, payloads: &[E]);

    /// Delivers a single payload.
    fn dispatch_one(&self, id: &Id, payload: &E) {
        self.dispatch(id, slice::from_ref(payload));
    }

    /// Delivers the default payload.
    fn dispatch_default(&self, id: &Id) {
        self.dispatch(id, &[]);
    }
}
