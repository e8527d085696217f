//! Cursor-based buffer views over a shared store.
//!
//! - [`Buffer`] - One view: a window `(offset, capacity)` into a
//!   [`Store`] plus its own position, limit and mark
//! - [`DoubleBuffer`] / [`FloatBuffer`] - The `f64` and `f32` instantiations
//!
//! Views created by [`wrap`](Buffer::wrap), [`slice`](Buffer::slice),
//! [`duplicate`](Buffer::duplicate) and
//! [`as_read_only_buffer`](Buffer::as_read_only_buffer) share the store of
//! their source. Writes through one are visible through all of them; cursors
//! are never shared.
//!
//! # Example
//!
//! ```
//! use floatbuf::DoubleBuffer;
//!
//! let mut buf = DoubleBuffer::allocate(4)?;
//! buf.put(1.0)?.put(2.0)?;
//! buf.flip();
//!
//! let mut dst = [0.0; 2];
//! buf.get_slice(&mut dst)?;
//! assert_eq!(dst, [1.0, 2.0]);
//! assert_eq!(buf.position(), 2);
//! # Ok::<(), floatbuf::BufferError>(())
//! ```

mod access;
mod cursor;
mod value;

use tracing::{debug, trace};

use crate::element::Element;
use crate::error::BufferError;
use crate::store::{HeapFactory, Store, StoreFactory};

use cursor::Cursor;

/// A buffer of `f64` values.
pub type DoubleBuffer = Buffer<f64>;

/// A buffer of `f32` values.
pub type FloatBuffer = Buffer<f32>;

/// A bounded view with a movable cursor over a shared [`Store`].
///
/// # Cursor
///
/// `mark <= position <= limit <= capacity` holds after every call.
/// Sequential accessors ([`get`](Buffer::get), [`put`](Buffer::put) and the
/// bulk variants) read or write at `position` and advance it; absolute
/// accessors ([`get_at`](Buffer::get_at), [`put_at`](Buffer::put_at)) leave
/// it alone.
///
/// # Sharing
///
/// `offset` and `capacity` are fixed per view. The store lives until the
/// last view (or [`Store`] handle) referencing it is dropped. Cursor
/// mutation takes `&mut self`; sharing a store across threads is allowed,
/// but nothing orders writes from different views.
///
/// # Read-only views
///
/// Read-only-ness belongs to the view. A read-only view rejects every
/// mutation with [`BufferError::ReadOnly`] even though its writable twin
/// can still change the shared data.
#[derive(Debug)]
pub struct Buffer<T: Element> {
    store: Store<T>,
    offset: usize,
    cursor: Cursor,
    read_only: bool,
    direct: bool,
}

impl<T: Element> Buffer<T> {
    /// Allocates a writable buffer over a fresh zeroed store of exactly
    /// `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `capacity` exceeds the
    /// default [`BufferConfig`](crate::BufferConfig) maximum.
    pub fn allocate(capacity: usize) -> Result<Self, BufferError> {
        Self::allocate_in(&HeapFactory::default(), capacity)
    }

    /// Allocates a writable buffer using `factory` for the store.
    pub fn allocate_in<F>(factory: &F, capacity: usize) -> Result<Self, BufferError>
    where
        F: StoreFactory<T> + ?Sized,
    {
        let store = factory.allocate(capacity)?;
        debug_assert_eq!(store.len(), capacity);
        let direct = factory.is_direct();
        debug!(capacity, direct, kind = T::BUFFER_NAME, "allocated buffer");

        Ok(Self {
            store,
            offset: 0,
            cursor: Cursor::new(capacity),
            read_only: false,
            direct,
        })
    }

    /// Wraps `store` without copying it.
    ///
    /// The buffer spans the whole store (`capacity = store.len()`) with
    /// `position = offset` and `limit = offset + length`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `offset + length` runs
    /// past the store.
    ///
    /// # Example
    ///
    /// ```
    /// use floatbuf::{DoubleBuffer, Store};
    ///
    /// let store: Store<f64> = Store::from(vec![1.0, 2.0, 3.0, 4.0]);
    /// let buf = DoubleBuffer::wrap(store, 1, 2)?;
    /// assert_eq!((buf.position(), buf.limit(), buf.capacity()), (1, 3, 4));
    /// # Ok::<(), floatbuf::BufferError>(())
    /// ```
    pub fn wrap(store: Store<T>, offset: usize, length: usize) -> Result<Self, BufferError> {
        let capacity = store.len();
        let limit = offset.checked_add(length).ok_or_else(|| {
            BufferError::invalid_argument(format!(
                "window {}+{} overflows",
                offset, length
            ))
        })?;
        let cursor = Cursor::with_window(capacity, offset, limit)?;
        trace!(capacity, offset, length, "wrapped store");

        Ok(Self {
            store,
            offset: 0,
            cursor,
            read_only: false,
            direct: false,
        })
    }

    /// Wraps the whole of `store`.
    pub fn wrap_all(store: Store<T>) -> Self {
        let capacity = store.len();
        Self {
            store,
            offset: 0,
            cursor: Cursor::new(capacity),
            read_only: false,
            direct: false,
        }
    }

    /// Moves `values` into a new store and wraps all of it.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::wrap_all(Store::from(values))
    }

    /// Returns the cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Moves the cursor, dropping the mark if it lies past `position`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `position > limit`.
    pub fn set_position(&mut self, position: usize) -> Result<&mut Self, BufferError> {
        self.cursor.set_position(position)?;
        Ok(self)
    }

    /// Returns the limit.
    #[inline]
    pub fn limit(&self) -> usize {
        self.cursor.limit()
    }

    /// Sets the limit. The position is pulled back to it if it lies beyond,
    /// and the mark is dropped if it lies beyond.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `limit > capacity`.
    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self, BufferError> {
        self.cursor.set_limit(limit)?;
        Ok(self)
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Returns `limit - position`.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Returns true if at least one element remains.
    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Records the current position as the mark.
    pub fn mark(&mut self) -> &mut Self {
        self.cursor.mark();
        self
    }

    /// Returns the mark, if set.
    pub fn mark_value(&self) -> Option<usize> {
        self.cursor.mark_value()
    }

    /// Moves the position back to the mark.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidMark`] if no mark is set.
    pub fn reset(&mut self) -> Result<&mut Self, BufferError> {
        self.cursor.reset()?;
        Ok(self)
    }

    /// `position = 0`, `limit = capacity`, mark dropped. Data is untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.cursor.clear();
        self
    }

    /// `limit = position`, `position = 0`, mark dropped.
    pub fn flip(&mut self) -> &mut Self {
        self.cursor.flip();
        self
    }

    /// `position = 0`, mark dropped.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.rewind();
        self
    }

    /// Returns true if this view rejects mutation.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns true if the store came from a factory reporting direct
    /// (non-heap) storage.
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Always true: every buffer is backed by a [`Store`].
    pub fn has_array(&self) -> bool {
        true
    }

    /// Returns the backing store for zero-copy interop.
    ///
    /// Element `i` of this view is element `array_offset() + i` of the
    /// store. The handle is returned for read-only views too.
    pub fn array(&self) -> &Store<T> {
        &self.store
    }

    /// Returns the store index of this view's element 0.
    pub fn array_offset(&self) -> usize {
        self.offset
    }

    /// New view over `[position, limit)` of this one.
    ///
    /// The slice starts at `position = 0` with `capacity = limit =
    /// remaining()` and no mark. It keeps this view's read-only flag.
    ///
    /// ```
    /// use floatbuf::DoubleBuffer;
    ///
    /// let mut buf = DoubleBuffer::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    /// buf.set_position(1)?;
    /// let mut slice = buf.slice();
    /// assert_eq!(slice.capacity(), 3);
    ///
    /// slice.put_at(0, 9.0)?;
    /// assert_eq!(buf.get_at(1)?, 9.0);
    /// # Ok::<(), floatbuf::BufferError>(())
    /// ```
    pub fn slice(&self) -> Self {
        let offset = self.offset + self.position();
        let cursor = self.cursor.sliced();
        trace!(offset, capacity = cursor.capacity(), "sliced buffer");

        Self {
            store: self.store.clone(),
            offset,
            cursor,
            read_only: self.read_only,
            direct: self.direct,
        }
    }

    /// New view with the same window, cursor, mark and read-only flag.
    /// Subsequent cursor moves are independent.
    pub fn duplicate(&self) -> Self {
        trace!(offset = self.offset, capacity = self.capacity(), "duplicated buffer");
        Self {
            store: self.store.clone(),
            offset: self.offset,
            cursor: self.cursor,
            read_only: self.read_only,
            direct: self.direct,
        }
    }

    /// Like [`duplicate`](Buffer::duplicate), but the new view is
    /// read-only. There is no way back to a writable view from it.
    pub fn as_read_only_buffer(&self) -> Self {
        Self {
            read_only: true,
            ..self.duplicate()
        }
    }

    /// Moves `[position, limit)` to the start of the view, then sets
    /// `position = remaining`, `limit = capacity` and drops the mark.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`] on a read-only view.
    ///
    /// ```
    /// use floatbuf::DoubleBuffer;
    ///
    /// let mut buf = DoubleBuffer::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    /// buf.set_position(2)?;
    /// buf.compact()?;
    /// assert_eq!((buf.position(), buf.limit()), (2, 4));
    /// assert_eq!(buf.get_at(0)?, 3.0);
    /// # Ok::<(), floatbuf::BufferError>(())
    /// ```
    pub fn compact(&mut self) -> Result<&mut Self, BufferError> {
        self.ensure_writable()?;
        let moved = self.remaining();
        let src = self.offset + self.position();
        for i in 0..moved {
            self.store.write(self.offset + i, self.store.read(src + i));
        }
        self.cursor.compacted(moved);
        trace!(moved, capacity = self.capacity(), "compacted buffer");
        Ok(self)
    }

    #[inline]
    fn ensure_writable(&self) -> Result<(), BufferError> {
        if self.read_only {
            return Err(BufferError::ReadOnly);
        }
        Ok(())
    }

    /// Store index of the element at `position`.
    #[inline]
    fn cursor_index(&self) -> usize {
        self.offset + self.position()
    }
}

impl<T: Element> From<Vec<T>> for Buffer<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}
