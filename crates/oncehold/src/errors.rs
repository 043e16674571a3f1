//! Error types for oncehold.
//!
//! The primary holder operations are deliberately infallible — a redundant
//! `initialize` is a silent no-op and an uninitialised read yields the empty
//! string.  This module exists for the *checked* variants
//! ([`try_initialize`][crate::Holder::try_initialize],
//! [`try_value`][crate::Holder::try_value]) that report those conditions
//! instead of swallowing them.

use thiserror::Error;

/// The error type returned by the checked holder operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The payload was read before any successful initialisation.
    #[error("payload has not been initialized")]
    Uninitialized,

    /// The payload was already fixed by an earlier initialisation.
    #[error("payload already initialized to {current:?}")]
    AlreadyInitialized {
        /// The payload that won the earlier initialisation.
        current: String,
    },
}

/// Shorthand `Result` type used throughout oncehold.
pub type Result<T, E = Error> = std::result::Result<T, E>;
