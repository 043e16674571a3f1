//! `OnceValue<T>` — a write-once cell with first-writer-wins semantics.
//!
//! The cell starts empty; the first successful [`set_once`][OnceValue::set_once]
//! fixes the value for the cell's lifetime and every later write is ignored.
//! The check-and-set transition is atomic (it delegates to
//! [`OnceLock::set`][std::sync::OnceLock::set]), so two threads racing on an
//! empty cell cannot both believe they won: exactly one write takes effect
//! and it happens-before every read that observes the value.

use std::sync::OnceLock;

/// A write-once container for a value of type `T`.
///
/// # Example
/// ```
/// use oncehold::OnceValue;
///
/// let cell = OnceValue::new();
/// assert!(cell.set_once(10));
/// assert!(!cell.set_once(20)); // ignored
/// assert_eq!(cell.get(), Some(&10));
/// ```
pub struct OnceValue<T> {
    cell: OnceLock<T>,
}

impl<T> OnceValue<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Attempt to fix the cell's value.
    ///
    /// Returns `true` if this call won the write, `false` if the value was
    /// already set (by this thread or any other).  Discarding the return
    /// value gives the silent first-writer-wins behaviour.
    pub fn set_once(&self, value: T) -> bool {
        self.cell.set(value).is_ok()
    }

    /// Return a reference to the stored value, or `None` if the cell is
    /// still empty.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return `true` once a value has been fixed.
    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for OnceValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OnceValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(v) => write!(f, "OnceValue({:?})", v),
            None => write!(f, "OnceValue(unset)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell() {
        let cell: OnceValue<i32> = OnceValue::new();
        assert!(!cell.is_set());
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn first_write_wins() {
        let cell = OnceValue::new();
        assert!(cell.set_once("a"));
        assert!(!cell.set_once("b"));
        assert_eq!(cell.get(), Some(&"a"));
        assert!(cell.is_set());
    }

    #[test]
    fn default_is_empty() {
        let cell: OnceValue<String> = OnceValue::default();
        assert!(!cell.is_set());
    }

    #[test]
    fn debug_formatting() {
        let cell = OnceValue::new();
        assert_eq!(format!("{:?}", cell), "OnceValue(unset)");
        cell.set_once(42);
        assert_eq!(format!("{:?}", cell), "OnceValue(42)");
    }
}
