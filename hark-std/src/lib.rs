//! # hark-std
//!
//! Standard implementations for the Hark event dispatch library.
//!
//! This crate provides:
//! - **Registration**: [`MatcherBuilder`](matching::MatcherBuilder)
//! - **Matching**: [`MapMatcher`](matching::MapMatcher), an immutable snapshot
//! - **Dispatch**: [`Dispatcher`](dispatch::Dispatcher)
//! - **Standard listeners**: Logging
//! - **Testing helpers**: recording and counting listeners

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hark_core;

// Modules
pub mod dispatch;
pub mod listeners;
pub mod matching;
pub mod testing;
