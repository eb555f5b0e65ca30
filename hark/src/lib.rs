//! # hark - In-Process Event Dispatch
//!
//! `hark` delivers events to the listeners that asked for them. Listeners
//! register against an identifier (or against every identifier), the
//! registrations are frozen into an immutable matcher, and a dispatcher fans
//! payloads out to whatever the matcher returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hark::prelude::*;
//!
//! let mut builder = MatcherBuilder::new();
//! builder
//!     .add_global_listener(LoggingListener)
//!     .add_listener(["user.login"], from_fn(|id: &&str, name: &String| {
//!         println!("{id}: {name}");
//!     }));
//!
//! let dispatcher = Dispatcher::new(builder.build());
//! hark::dispatch!(dispatcher, "user.login", "ada".to_string(), "grace".to_string());
//! hark::dispatch!(dispatcher, "user.logout"); // default payload, globals only
//! ```
//!
//! ## Ordering
//!
//! Global listeners run before selective ones, each group in registration
//! order. With several payloads, every listener receives the first payload
//! before any listener receives the second.
//!
//! ## Immutability
//!
//! [`MatcherBuilder::build`] copies the registrations. A matcher (and the
//! dispatcher wrapping it) never observes later registrations, which makes
//! both safe to share across threads without locking.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hark_core::{
    BoxFn,
    // Dispatch
    EventDispatcher,
    // Identifiers and payloads
    EventId,
    Filter,
    FnListener,
    // Listener
    Listener,
    ListenerMap,
    // Matching
    Matcher,
    NoopListener,
    Payload,
    // Error types
    RegistrationError,
    SharedListener,
    from_fn,
    zero,
};

pub use hark_std::{
    dispatch::Dispatcher,
    matching::{MapMatcher, MatcherBuilder},
};

/// Standard listener implementations.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use hark_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hark_std::testing::*;
}

/// Dispatches to `$dispatcher` under `$id`.
///
/// With no payloads the default payload is delivered once; otherwise each
/// payload is delivered in the order given.
///
/// ```rust,ignore
/// hark::dispatch!(dispatcher, "tick");
/// hark::dispatch!(dispatcher, "tick", 1, 2, 3);
/// ```
#[macro_export]
macro_rules! dispatch {
    ($dispatcher:expr, $id:expr $(,)?) => {{
        use $crate::EventDispatcher as _;
        ($dispatcher).dispatch_default(&$id)
    }};
    ($dispatcher:expr, $id:expr, $($payload:expr),+ $(,)?) => {{
        use $crate::EventDispatcher as _;
        ($dispatcher).dispatch(&$id, &[$($payload),+])
    }};
}

/// Prelude module - common imports for Hark.
///
/// # Usage
///
/// ```rust,ignore
/// use hark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::listeners::LoggingListener;
    pub use crate::{
        Dispatcher, EventDispatcher, Listener, ListenerMap, MapMatcher, Matcher, MatcherBuilder,
        RegistrationError, SharedListener, from_fn, zero,
    };
}
