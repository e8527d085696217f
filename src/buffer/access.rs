//! Element-wise and bulk accessors.
//!
//! Bulk transfers validate every bound before the first element moves and
//! then copy forward, one element at a time, in index order. Views that
//! alias overlapping parts of one store therefore see the same result as a
//! naive forward loop.

use crate::element::Element;
use crate::error::BufferError;

use super::Buffer;

/// Validates `[offset, offset + length)` against an array of `len`
/// elements and returns the exclusive end.
///
/// The offset must lie inside `[0, len)` even for an empty range.
fn check_array_range(len: usize, offset: usize, length: usize) -> Result<usize, BufferError> {
    if offset >= len {
        return Err(BufferError::OffsetOutOfBounds { offset, len });
    }
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(end),
        _ => Err(BufferError::RangeOutOfBounds {
            end: offset.saturating_add(length),
            len,
        }),
    }
}

impl<T: Element> Buffer<T> {
    /// Reads the element at `position` and advances by one.
    ///
    /// # Errors
    ///
    /// [`BufferError::Underflow`] if nothing remains.
    #[inline]
    pub fn get(&mut self) -> Result<T, BufferError> {
        if !self.has_remaining() {
            return Err(BufferError::Underflow {
                requested: 1,
                remaining: 0,
            });
        }
        let value = self.store.read(self.cursor_index());
        self.cursor.advance(1);
        Ok(value)
    }

    /// Writes `value` at `position` and advances by one.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`] on a read-only view, otherwise
    /// [`BufferError::Overflow`] if nothing remains.
    #[inline]
    pub fn put(&mut self, value: T) -> Result<&mut Self, BufferError> {
        self.ensure_writable()?;
        if !self.has_remaining() {
            return Err(BufferError::Overflow {
                requested: 1,
                remaining: 0,
            });
        }
        self.store.write(self.cursor_index(), value);
        self.cursor.advance(1);
        Ok(self)
    }

    /// Reads the element at `index` (relative to this view's start)
    /// without moving the cursor.
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfBounds`] unless `index < limit`.
    #[inline]
    pub fn get_at(&self, index: usize) -> Result<T, BufferError> {
        self.check_index(index)?;
        Ok(self.store.read(self.offset + index))
    }

    /// Writes `value` at `index` (relative to this view's start) without
    /// moving the cursor.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`] on a read-only view, otherwise
    /// [`BufferError::IndexOutOfBounds`] unless `index < limit`.
    #[inline]
    pub fn put_at(&mut self, index: usize, value: T) -> Result<&mut Self, BufferError> {
        self.ensure_writable()?;
        self.check_index(index)?;
        self.store.write(self.offset + index, value);
        Ok(self)
    }

    /// Copies `length` elements from `position` into
    /// `dst[offset..offset + length]` and advances by `length`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// 1. [`BufferError::OffsetOutOfBounds`] unless `offset < dst.len()`
    /// 2. [`BufferError::RangeOutOfBounds`] if `offset + length > dst.len()`
    /// 3. [`BufferError::Underflow`] if `remaining() < length`
    ///
    /// An empty `dst` is rejected by the first check.
    pub fn get_into(
        &mut self,
        dst: &mut [T],
        offset: usize,
        length: usize,
    ) -> Result<&mut Self, BufferError> {
        let end = check_array_range(dst.len(), offset, length)?;
        let remaining = self.remaining();
        if remaining < length {
            return Err(BufferError::Underflow {
                requested: length,
                remaining,
            });
        }

        let start = self.cursor_index();
        for (i, slot) in dst[offset..end].iter_mut().enumerate() {
            *slot = self.store.read(start + i);
        }
        self.cursor.advance(length);
        Ok(self)
    }

    /// Fills all of `dst` from `position`. See [`get_into`](Buffer::get_into).
    pub fn get_slice(&mut self, dst: &mut [T]) -> Result<&mut Self, BufferError> {
        let len = dst.len();
        self.get_into(dst, 0, len)
    }

    /// Copies `src[offset..offset + length]` to `position` and advances by
    /// `length`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// 1. [`BufferError::ReadOnly`] on a read-only view
    /// 2. [`BufferError::Overflow`] if `remaining() < length`
    /// 3. [`BufferError::OffsetOutOfBounds`] unless `offset < src.len()`
    /// 4. [`BufferError::RangeOutOfBounds`] if `offset + length > src.len()`
    pub fn put_from(
        &mut self,
        src: &[T],
        offset: usize,
        length: usize,
    ) -> Result<&mut Self, BufferError> {
        let end = self.check_put(src.len(), offset, length)?;

        let start = self.cursor_index();
        for (i, &value) in src[offset..end].iter().enumerate() {
            self.store.write(start + i, value);
        }
        self.cursor.advance(length);
        Ok(self)
    }

    /// Writes all of `src` at `position`. See [`put_from`](Buffer::put_from).
    pub fn put_slice(&mut self, src: &[T]) -> Result<&mut Self, BufferError> {
        self.put_from(src, 0, src.len())
    }

    /// Copies the remaining elements of `src` to `position` and advances
    /// this buffer by `src.remaining()`.
    ///
    /// `src`'s cursor is left where it is. The checks are those of
    /// [`put_from`](Buffer::put_from), applied to `src`'s whole store with
    /// the offset of `src`'s position in it; in particular a `src` whose
    /// position sits at the very end of its store fails the offset check
    /// even with nothing remaining.
    ///
    /// `src` may share this buffer's store. Overlapping windows are copied
    /// forward element by element.
    ///
    /// ```
    /// use floatbuf::DoubleBuffer;
    ///
    /// let src = DoubleBuffer::from_vec(vec![1.0, 2.0]);
    /// let mut dst = DoubleBuffer::allocate(3)?;
    /// dst.put_buffer(&src)?;
    ///
    /// assert_eq!(dst.position(), 2);
    /// assert_eq!(src.position(), 0);
    /// # Ok::<(), floatbuf::BufferError>(())
    /// ```
    pub fn put_buffer(&mut self, src: &Buffer<T>) -> Result<&mut Self, BufferError> {
        let length = src.remaining();
        let offset = src.cursor_index();
        let end = self.check_put(src.store.len(), offset, length)?;

        let start = self.cursor_index();
        for (i, index) in (offset..end).enumerate() {
            self.store.write(start + i, src.store.read(index));
        }
        self.cursor.advance(length);
        Ok(self)
    }

    fn check_put(&self, src_len: usize, offset: usize, length: usize) -> Result<usize, BufferError> {
        self.ensure_writable()?;
        let remaining = self.remaining();
        if remaining < length {
            return Err(BufferError::Overflow {
                requested: length,
                remaining,
            });
        }
        check_array_range(src_len, offset, length)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), BufferError> {
        if index >= self.limit() {
            return Err(BufferError::IndexOutOfBounds {
                index,
                limit: self.limit(),
            });
        }
        Ok(())
    }
}
