//! A value that may or may not be present
//!
//! [`Optional<T>`] holds either a `T` or nothing. It can be built from a
//! value, from the [`UntypedEmpty`] marker when the type is inferred from
//! the context, or by picking the first present value among several
//! candidates:
//!
//! ```
//! use optional_value::{first_with_value, Optional, UntypedEmpty};
//!
//! let configured: Optional<&str> = UntypedEmpty.typed();
//! let fallback = Optional::create("localhost");
//!
//! let host = first_with_value!(configured, fallback);
//! assert_eq!(host.value(), Ok(&"localhost"));
//! assert_eq!(configured.or_default("0.0.0.0"), "0.0.0.0");
//! ```

mod empty;
mod error;
mod optional;

pub use empty::{empty, UntypedEmpty};
pub use error::NoValueError;
pub use optional::{first_with_value, Optional};

/// Returns the first argument that holds a value
///
/// This is [`first_with_value`](fn@first_with_value) with the candidates
/// passed as separate arguments. All arguments are evaluated before the
/// scan starts.
#[macro_export]
macro_rules! first_with_value {
    ($($candidate:expr),* $(,)?) => {
        $crate::first_with_value([$($candidate),*])
    };
}
