//! # oncehold
//!
//! Lazily initialised, write-once process-wide state holders.
//!
//! The crate provides the building blocks for the classic "create the shared
//! instance on first access, assign its payload exactly once" pattern:
//!
//! - [`OnceValue<T>`] — a write-once cell with first-writer-wins semantics;
//! - [`Holder`] — a string-payload holder with a lazily constructed
//!   process-wide instance;
//! - [`define_singleton!`] — a macro for declaring further lazily
//!   initialised process-wide instances.
//!
//! The traditional implementation of this pattern is hand-rolled
//! double-checked locking: read the instance pointer without a lock, and only
//! on the `null` path take a lock and re-check before constructing.  Getting
//! that right requires acquire/release ordering on the publishing store; the
//! standard library's [`OnceLock`][std::sync::OnceLock] and
//! [`LazyLock`][std::sync::LazyLock] implement the same fast-path/slow-path
//! shape with safe publication built in, so this crate uses them throughout
//! instead of raw atomics.
//!
//! ## Quick start
//!
//! ```rust
//! use oncehold::Holder;
//!
//! let a = Holder::instance();
//! a.initialize("initial value");
//!
//! let b = Holder::instance();
//! b.initialize("another value"); // ignored: the payload is already fixed
//!
//! assert!(std::ptr::eq(a, b));
//! assert_eq!(a.value(), "initial value");
//! assert_eq!(b.value(), "initial value");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `Result` alias.
pub mod errors;

/// The string-payload holder and its process-wide instance.
pub mod holder;

/// The generic write-once cell.
pub mod once_value;

/// The `define_singleton!` declaration macro.
pub mod singleton;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use holder::Holder;
pub use once_value::OnceValue;
