//! Declaration support for further process-wide instances.
//!
//! [`Holder`][crate::Holder] covers the write-once string payload; other
//! types that need a single lazily constructed process-wide instance can be
//! declared with [`define_singleton!`].  The idiomatic container for this in
//! Rust is `std::sync::LazyLock<T>`, which initialises the value on first
//! dereference with safe publication guaranteed — the same fast-path /
//! locked-slow-path shape as a hand-written double-checked lock, without the
//! memory-ordering hazard.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Declare a lazily initialised process-wide instance of type `$ty`.
///
/// The instance is constructed on first dereference; all threads observe the
/// same, fully constructed value.  With the two-argument form the type's
/// `Default` implementation supplies the initial value.
///
/// # Example
/// ```
/// use oncehold::{define_singleton, Holder};
///
/// define_singleton!(APP_CONFIG, Holder);
/// define_singleton!(GREETING, String, String::from("hello"));
///
/// APP_CONFIG.initialize("production");
/// assert_eq!(APP_CONFIG.value(), "production");
/// assert_eq!(GREETING.as_str(), "hello");
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty) => {
        $crate::define_singleton!($name, $ty, <$ty as Default>::default());
    };
    ($name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised process-wide instance.
        pub static $name: $crate::singleton::LazyLock<$ty> =
            $crate::singleton::LazyLock::new(|| $init);
    };
}
