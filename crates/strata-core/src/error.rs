//! Error types for the Strata containers.
//!
//! Every fallible container operation reports one of the
//! [`ContainerError`] variants. None of them are retried internally;
//! recovery (e.g. freeing memory elsewhere before growing again) is up
//! to the caller.

use std::error::Error;
use std::fmt;

use crate::id::{ContainerId, Generation};

/// Errors returned by container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// Checked access, or an insert/erase position, outside the valid
    /// index space of the container.
    OutOfRange {
        /// The offending index (or range end).
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// `first`/`last`/`pop_back` (or the list's front/back family) on a
    /// container with no elements.
    EmptyContainer,
    /// A range whose end precedes its start.
    InvalidRange {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
    },
    /// A cursor that does not belong to the container, or that was
    /// invalidated by a later mutation.
    InvalidIterator {
        /// Why the cursor was rejected.
        fault: CursorFault,
    },
    /// The backing store could not be allocated or grown.
    ///
    /// Also covers capacity computations that would overflow `usize`
    /// or exceed `isize::MAX` bytes.
    AllocationFailure {
        /// Number of element slots that were requested.
        requested: usize,
    },
    /// The container was configured with a rejected [`GrowthPolicy`].
    ///
    /// [`GrowthPolicy`]: crate::GrowthPolicy
    InvalidPolicy(PolicyError),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: end {end} precedes start {start}")
            }
            Self::InvalidIterator { fault } => write!(f, "invalid cursor: {fault}"),
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::InvalidPolicy(e) => write!(f, "growth policy: {e}"),
        }
    }
}

impl Error for ContainerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPolicy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PolicyError> for ContainerError {
    fn from(e: PolicyError) -> Self {
        Self::InvalidPolicy(e)
    }
}

/// Reason a cursor was rejected with [`ContainerError::InvalidIterator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorFault {
    /// The cursor was obtained from a different container.
    ForeignContainer {
        /// Container the cursor was taken from.
        cursor: ContainerId,
        /// Container it was presented to.
        container: ContainerId,
    },
    /// The container has been restructured since the cursor was taken.
    Stale {
        /// Generation recorded in the cursor.
        cursor: Generation,
        /// Current generation of the container.
        current: Generation,
    },
}

impl fmt::Display for CursorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignContainer { cursor, container } => {
                write!(f, "cursor from container {cursor} used on container {container}")
            }
            Self::Stale { cursor, current } => {
                write!(f, "stale cursor: generation {cursor}, current {current}")
            }
        }
    }
}

/// Errors detected by [`GrowthPolicy::validate()`](crate::GrowthPolicy::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The growth factor cannot amortize reallocation cost.
    FactorTooSmall {
        /// The configured factor, in percent.
        factor_percent: u32,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorTooSmall { factor_percent } => write!(
                f,
                "growth factor {factor_percent}% is below the minimum of {}%",
                crate::GrowthPolicy::MIN_FACTOR_PERCENT
            ),
        }
    }
}

impl Error for PolicyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let e = ContainerError::OutOfRange { index: 3, len: 3 };
        assert_eq!(e.to_string(), "index 3 out of range for length 3");
    }

    #[test]
    fn policy_error_is_source_of_container_error() {
        let inner = PolicyError::FactorTooSmall { factor_percent: 100 };
        let e = ContainerError::from(inner);
        let source = e.source().expect("policy error should be the source");
        assert_eq!(source.to_string(), inner.to_string());
    }

    #[test]
    fn stale_cursor_message() {
        let fault = CursorFault::Stale {
            cursor: Generation(2),
            current: Generation(5),
        };
        let e = ContainerError::InvalidIterator { fault };
        assert_eq!(
            e.to_string(),
            "invalid cursor: stale cursor: generation 2, current 5"
        );
    }
}
