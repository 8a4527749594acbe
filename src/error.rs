use std::fmt::{self, Display};

/// Error returned when reading the value of an absent [`Optional`]
///
/// [`Optional`]: crate::Optional
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoValueError;

impl Display for NoValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value was set for this optional")
    }
}

impl std::error::Error for NoValueError {}
