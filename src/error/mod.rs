//! Error types for floatbuf.

use thiserror::Error;

/// Errors raised by buffer operations.
///
/// Every operation validates all of its preconditions before touching the
/// cursor or the store, so a returned error never leaves a partial write
/// behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// An argument was rejected outright (capacity, new position/limit,
    /// wrap window, configuration).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: String,
    },

    /// An absolute index fell outside `[0, limit)`.
    #[error("index {index} is outside of range [0;{limit})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The buffer limit at the time of the call.
        limit: usize,
    },

    /// A bulk-transfer offset fell outside `[0, len)` of the array.
    #[error("offset {offset} is outside of range [0;{len})")]
    OffsetOutOfBounds {
        /// The requested offset.
        offset: usize,
        /// Length of the array being read from or written to.
        len: usize,
    },

    /// The end of a bulk-transfer range ran past the array.
    #[error("the last element {end} is outside of array of size {len}")]
    RangeOutOfBounds {
        /// Exclusive end of the requested range (saturated on overflow).
        end: usize,
        /// Length of the array being read from or written to.
        len: usize,
    },

    /// A read asked for more elements than remain before the limit.
    #[error("buffer underflow: requested {requested}, remaining {remaining}")]
    Underflow {
        /// Elements requested.
        requested: usize,
        /// Elements remaining.
        remaining: usize,
    },

    /// A write asked for more room than remains before the limit.
    #[error("buffer overflow: requested {requested}, remaining {remaining}")]
    Overflow {
        /// Elements requested.
        requested: usize,
        /// Elements remaining.
        remaining: usize,
    },

    /// A mutation was attempted through a read-only view.
    #[error("buffer is read-only")]
    ReadOnly,

    /// `reset` was called while no mark was set.
    #[error("mark is not set")]
    InvalidMark,
}

/// Coarse classification of a [`BufferError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BufferError::InvalidArgument`].
    InvalidArgument,
    /// Any of the index, offset or range bound violations.
    OutOfBounds,
    /// See [`BufferError::Underflow`].
    Underflow,
    /// See [`BufferError::Overflow`].
    Overflow,
    /// See [`BufferError::ReadOnly`].
    ReadOnly,
    /// See [`BufferError::InvalidMark`].
    InvalidMark,
}

impl BufferError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            BufferError::IndexOutOfBounds { .. }
            | BufferError::OffsetOutOfBounds { .. }
            | BufferError::RangeOutOfBounds { .. } => ErrorKind::OutOfBounds,
            BufferError::Underflow { .. } => ErrorKind::Underflow,
            BufferError::Overflow { .. } => ErrorKind::Overflow,
            BufferError::ReadOnly => ErrorKind::ReadOnly,
            BufferError::InvalidMark => ErrorKind::InvalidMark,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        BufferError::InvalidArgument {
            message: message.into(),
        }
    }
}
