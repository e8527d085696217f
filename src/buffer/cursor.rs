//! Cursor state machine: position, limit, mark and capacity.
//!
//! Every transition re-establishes
//! `mark <= position <= limit <= capacity`, dropping the mark when a move
//! would leave it past the new position or limit.

use crate::error::BufferError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    position: usize,
    limit: usize,
    capacity: usize,
    mark: Option<usize>,
}

impl Cursor {
    /// Full window: `position = 0`, `limit = capacity`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            position: 0,
            limit: capacity,
            capacity,
            mark: None,
        }
    }

    /// Cursor with an explicit starting window, as produced by `wrap`.
    pub(crate) fn with_window(
        capacity: usize,
        position: usize,
        limit: usize,
    ) -> Result<Self, BufferError> {
        if limit > capacity {
            return Err(BufferError::invalid_argument(format!(
                "limit {} exceeds capacity {}",
                limit, capacity
            )));
        }
        if position > limit {
            return Err(BufferError::invalid_argument(format!(
                "position {} exceeds limit {}",
                position, limit
            )));
        }
        Ok(Self {
            position,
            limit,
            capacity,
            mark: None,
        })
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn mark_value(&self) -> Option<usize> {
        self.mark
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            return Err(BufferError::invalid_argument(format!(
                "new position {} is outside of range [0;{}]",
                position, self.limit
            )));
        }
        if self.mark.is_some_and(|mark| mark > position) {
            self.mark = None;
        }
        self.position = position;
        Ok(())
    }

    pub(crate) fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        if limit > self.capacity {
            return Err(BufferError::invalid_argument(format!(
                "new limit {} is outside of range [0;{}]",
                limit, self.capacity
            )));
        }
        if self.mark.is_some_and(|mark| mark > limit) {
            self.mark = None;
        }
        if self.position > limit {
            self.position = limit;
        }
        self.limit = limit;
        Ok(())
    }

    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    pub(crate) fn reset(&mut self) -> Result<(), BufferError> {
        let mark = self.mark.ok_or(BufferError::InvalidMark)?;
        self.position = mark;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    pub(crate) fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    pub(crate) fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    /// Moves the position forward after a successful transfer.
    ///
    /// Callers check `count <= remaining()` first.
    #[inline]
    pub(crate) fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.remaining());
        self.position += count;
    }

    /// State after `compact` moved `moved` elements to the front.
    pub(crate) fn compacted(&mut self, moved: usize) {
        debug_assert!(moved <= self.capacity);
        self.position = moved;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Fresh cursor spanning exactly the remaining window, for `slice`.
    pub(crate) fn sliced(&self) -> Self {
        Self::new(self.remaining())
    }
}
