//! Error types used by the switchboard and its supporting primitives.
//!
//! This module defines two error enums:
//!
//! - [`SwitchboardError`] — argument validation failures at registration time
//!   (and when constructing identities from raw bytes).
//! - [`RingError`] — index and capacity failures of [`RingBuffer`](crate::RingBuffer).
//!
//! Both provide `as_label` / `as_message` helpers for logs.
//!
//! Unmatched broadcasts, duplicate registrations, unregistering an unknown
//! handle and full listener queues are **not** errors.

use thiserror::Error;

/// # Errors produced by the dispatch engine.
///
/// Returned synchronously to the caller of a registration method.
/// Delivery never produces an error for the broadcaster.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchboardError {
    /// A required argument was missing or unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl SwitchboardError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        SwitchboardError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use switchboard::SwitchboardError;
    ///
    /// let err = SwitchboardError::InvalidArgument { argument: "queue", reason: "closed".into() };
    /// assert_eq!(err.as_label(), "invalid_argument");
    /// ```
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            SwitchboardError::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// Returns a human-readable message with details about the error.
    #[must_use]
    pub fn as_message(&self) -> String {
        match self {
            SwitchboardError::InvalidArgument { argument, reason } => {
                format!("{argument}: {reason}")
            }
        }
    }
}

/// # Errors produced by [`RingBuffer`](crate::RingBuffer).
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// A ring buffer cannot hold zero elements.
    #[error("ring buffer capacity must be at least 1")]
    ZeroCapacity,

    /// Requested position is not currently held by the buffer.
    #[error("index {index} out of range for ring buffer of length {len}")]
    OutOfRange {
        /// Requested index (logical index or sequence number).
        index: u64,
        /// Number of elements currently held.
        len: usize,
    },
}

impl RingError {
    /// Returns a short stable label (snake_case) for use in logs.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            RingError::ZeroCapacity => "ring_zero_capacity",
            RingError::OutOfRange { .. } => "ring_out_of_range",
        }
    }

    /// Returns a human-readable message with details about the error.
    #[must_use]
    pub fn as_message(&self) -> String {
        match self {
            RingError::ZeroCapacity => "zero capacity".to_string(),
            RingError::OutOfRange { index, len } => format!("index {index} >= len {len}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let err = SwitchboardError::invalid("name", "empty");
        assert_eq!(err.as_label(), "invalid_argument");
        assert_eq!(err.as_message(), "name: empty");
        assert_eq!(err.to_string(), "invalid argument `name`: empty");

        let err = RingError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.as_label(), "ring_out_of_range");
        assert_eq!(err.as_message(), "index 7 >= len 3");
    }
}
