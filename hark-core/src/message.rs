//! Marker traits for event identifiers and payloads.

use std::hash::Hash;

/// A key that events are dispatched under.
///
/// Identifiers are opaque: the only thing Hark ever does with one is compare
/// it for equality (and hash it, to find its registrations). `Clone` is
/// needed to copy the registration map into each matcher snapshot. Blanket
/// implemented for every eligible type.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// enum Topic { Login, Logout }
///
/// // `Topic` is an `EventId` with no further work.
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an event identifier",
    label = "must be `Eq + Hash + Clone + Send + Sync + 'static`",
    note = "Identifiers are used as hash map keys and shared across threads."
)]
pub trait EventId: Eq + Hash + Clone + Send + Sync + 'static {}

impl<T> EventId for T where T: Eq + Hash + Clone + Send + Sync + 'static {}

/// A value delivered to listeners alongside an [`EventId`].
///
/// `Default::default()` is the "zero" payload: dispatching with no explicit
/// payloads delivers exactly one default value to every matched listener.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an event payload",
    label = "must be `Default + Send + Sync + 'static`",
    note = "Payloads need a default value for dispatches that carry none."
)]
pub trait Payload: Default + Send + Sync + 'static {}

impl<T> Payload for T where T: Default + Send + Sync + 'static {}
