//! The string-payload [`Holder`] and its process-wide instance.
//!
//! [`Holder::instance`] returns a lazily constructed global holder: the first
//! caller constructs it, every caller receives the same `&'static` reference,
//! and construction happens at most once even under concurrent first access.
//! The instance lives behind a `std::sync::OnceLock`, which provides the
//! lock-free fast path and the locked construct-and-publish slow path that a
//! hand-written double-checked lock would otherwise supply.
//!
//! A holder's payload is set at most once.  [`initialize`][Holder::initialize]
//! is first-writer-wins: the winning call fixes the payload and every later
//! call is silently ignored — it never reports that it did nothing, so callers
//! must not expect it to overwrite.  The checked variants
//! ([`try_initialize`][Holder::try_initialize], [`try_value`][Holder::try_value])
//! surface the lost-race and not-yet-set conditions for callers that care.
//!
//! The global instance cannot be reset within a process.  Code that needs an
//! independently scoped holder (a per-context configuration value, or a test)
//! should construct its own with [`Holder::new`] and pass it by reference.

use std::sync::OnceLock;

use crate::errors::{Error, Result};
use crate::once_value::OnceValue;

static INSTANCE: OnceLock<Holder> = OnceLock::new();

/// A holder for a write-once string payload.
///
/// The payload transitions from unset (reads yield `""`) to fixed at the
/// first [`initialize`][Holder::initialize] call and never changes again.
#[derive(Debug, Default)]
pub struct Holder {
    value: OnceValue<String>,
}

impl Holder {
    /// Return a reference to the process-wide holder, constructing it on the
    /// first call.
    ///
    /// All callers — including concurrent first callers — receive the same
    /// fully constructed instance.
    pub fn instance() -> &'static Holder {
        INSTANCE.get_or_init(Holder::new)
    }

    /// Create an independent, uninitialised holder.
    pub const fn new() -> Self {
        Self {
            value: OnceValue::new(),
        }
    }

    /// Attempt to fix the payload.
    ///
    /// The first call wins; every later call, from any thread and with any
    /// argument, is a silent no-op.  Use
    /// [`try_initialize`][Holder::try_initialize] to find out whether a call
    /// was ignored.
    pub fn initialize(&self, value: impl Into<String>) {
        let _ = self.value.set_once(value.into());
    }

    /// Like [`initialize`][Holder::initialize], but reports a lost race.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyInitialized`] (carrying the winning payload)
    /// if the payload was already fixed.
    pub fn try_initialize(&self, value: impl Into<String>) -> Result<()> {
        if self.value.set_once(value.into()) {
            Ok(())
        } else {
            Err(Error::AlreadyInitialized {
                current: self.value().to_owned(),
            })
        }
    }

    /// Return the payload, or the empty string if it was never initialised.
    pub fn value(&self) -> &str {
        self.value.get().map(String::as_str).unwrap_or("")
    }

    /// Return the payload, or [`Error::Uninitialized`] if it was never
    /// initialised.
    pub fn try_value(&self) -> Result<&str> {
        self.value
            .get()
            .map(String::as_str)
            .ok_or(Error::Uninitialized)
    }

    /// Return `true` once the payload has been fixed.
    pub fn is_initialized(&self) -> bool {
        self.value.is_set()
    }
}
