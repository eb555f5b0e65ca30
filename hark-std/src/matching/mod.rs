//! Listener registration and matching.
//!
//! Registrations are collected in a mutable [`MatcherBuilder`] and frozen
//! into immutable [`MapMatcher`] snapshots. A snapshot never changes after
//! it is built, no matter what happens to the builder afterwards.

pub mod builder;
pub mod map;

pub use builder::MatcherBuilder;
pub use map::MapMatcher;
