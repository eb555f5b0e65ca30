//! Error types for Hark.
//!
//! Matching and dispatch never fail. The only errors in the library are
//! caller mistakes at registration or construction time, described by
//! [`RegistrationError`]. The panicking entry points panic with its message;
//! the `try_*` entry points hand it back instead.

use thiserror::Error;

/// Misuse of a registration or construction entry point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// A selective registration named no identifiers, so it could never fire.
    #[error("invalid list of event identifiers provided - is empty")]
    EmptyIdentifiers,

    /// A listener-based constructor was given no listeners.
    #[error("invalid listeners provided - at least one listener is required")]
    NoListeners,

    /// A closure-based constructor was given no closures.
    #[error("invalid closures provided - at least one closure is required")]
    NoClosures,
}
