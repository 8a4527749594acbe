//! Defines the [`Optional`] type

use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::{empty::UntypedEmpty, error::NoValueError};


/// A value of type `T` that may or may not be present
///
/// Whether a value is present is decided at construction and never
/// changes afterwards. The combinators ([`Optional::or`],
/// [`first_with_value`]) produce new optionals instead of modifying
/// existing ones.
///
/// Two optionals are equal if both are absent or if both are present and
/// their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// The absent optional for `T`
    pub const EMPTY: Self = Self::Absent;

    /// Wrap a value
    ///
    /// The result is always present, even when `value` is itself something
    /// like `None`.
    pub const fn create(value: T) -> Self {
        Self::Present(value)
    }

    /// Adapt the untyped empty marker to this `T`
    pub const fn from_empty_marker(_marker: UntypedEmpty) -> Self {
        Self::EMPTY
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Present(x),
            None => Self::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the wrapped value
    ///
    /// Reading an absent optional is a missing presence check on the
    /// caller's side and yields a [`NoValueError`].
    pub fn value(&self) -> Result<&T, NoValueError> {
        match self {
            Self::Present(x) => Ok(x),
            Self::Absent => {
                debug!("attempted to read the value of an absent optional");
                Err(NoValueError)
            }
        }
    }

    /// Take the wrapped value out of the optional
    pub fn into_value(self) -> Result<T, NoValueError> {
        match self {
            Self::Present(x) => Ok(x),
            Self::Absent => {
                debug!("attempted to read the value of an absent optional");
                Err(NoValueError)
            }
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(x) => Optional::Present(x),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `self` if it holds a value and `other` otherwise
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns the wrapped value, or `default` if there is none
    pub fn or_default(self, default: T) -> T {
        match self {
            Self::Present(x) => x,
            Self::Absent => default,
        }
    }

    /// See [`first_with_value`]
    pub fn first_with_value(
        candidates: impl IntoIterator<Item = Self>,
    ) -> Self {
        first_with_value(candidates)
    }
}

/// Returns the first candidate that holds a value
///
/// The candidates are inspected in order and the scan stops at the first
/// present one. If no candidate holds a value, including when there are no
/// candidates at all, the result is [`Optional::EMPTY`].
///
/// The [`first_with_value!`](crate::first_with_value!) macro accepts the
/// candidates as separate arguments.
pub fn first_with_value<T>(
    candidates: impl IntoIterator<Item = Optional<T>>,
) -> Optional<T> {
    for (index, candidate) in candidates.into_iter().enumerate() {
        if candidate.has_value() {
            trace!("first_with_value: candidate {index} has a value");
            return candidate;
        }
    }
    trace!("first_with_value: no candidate has a value");
    Optional::EMPTY
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::create(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(x) => Some(x),
            Optional::Absent => None,
        }
    }
}

// An absent optional always hashes to the same constant, a present one
// hashes exactly like its value.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Present(x) => x.hash(state),
            Self::Absent => 0u64.hash(state),
        }
    }
}

impl<T> PartialEq<UntypedEmpty> for Optional<T> {
    fn eq(&self, _other: &UntypedEmpty) -> bool {
        !self.has_value()
    }
}

impl<T> PartialEq<Optional<T>> for UntypedEmpty {
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}
