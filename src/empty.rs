//! The untyped empty marker

use crate::optional::Optional;

/// An empty optional whose type is not known yet
///
/// Comparing an [`Optional`] against this marker tests whether it is
/// absent, and [`UntypedEmpty::typed`] turns it into the absent optional of
/// whatever type the context asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UntypedEmpty;

impl UntypedEmpty {
    pub const fn typed<T>(self) -> Optional<T> {
        Optional::from_empty_marker(self)
    }
}

/// An absent optional of an inferred type
///
/// ```
/// use optional_value::{empty, Optional};
///
/// let x: Optional<u32> = empty();
/// assert!(!x.has_value());
/// ```
pub const fn empty<T>() -> Optional<T> {
    UntypedEmpty.typed()
}
