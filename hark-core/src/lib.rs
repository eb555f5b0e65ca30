//! # hark-core
//!
//! Core traits for the Hark event dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to *implement* listeners or matchers, without
//! pulling in the standard implementations from `hark-std`.
//!
//! # Vocabulary
//!
//! - [`EventId`]: the key an event is dispatched under. Any `Eq + Hash` type.
//! - [`Payload`]: the value delivered with an event. Any `Default` type; the
//!   default value is what listeners receive when no payload is given.
//! - [`Listener`]: receives `(id, payload)` pairs. Returns nothing.
//! - [`Matcher`]: answers "which listeners apply to this id", in order.
//! - [`EventDispatcher`]: fans payloads out to the matched listeners.
//!
//! # Error Types
//!
//! - [`RegistrationError`] - Misuse of a registration or construction entry point

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod listener;
mod matcher;
mod message;

// Re-exports
pub use dispatcher::EventDispatcher;
pub use error::RegistrationError;
pub use listener::{
    BoxFn, Filter, FnListener, Listener, NoopListener, SharedListener, from_fn, zero,
};
pub use matcher::{ListenerMap, Matcher};
pub use message::{EventId, Payload};
