//! The shared store handle.

use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::error::BufferError;

/// A fixed-length block of elements shared by every view built on it.
///
/// Cloning a `Store` clones the handle; both handles address the same
/// elements. The block is freed when the last handle (including the ones
/// held by buffers) is dropped.
///
/// # Example
///
/// ```
/// use floatbuf::Store;
///
/// let store: Store<f64> = Store::from(vec![1.0, 2.0, 3.0]);
/// let alias = store.clone();
///
/// alias.set(1, 9.0)?;
/// assert_eq!(store.get(1), Some(9.0));
/// assert!(Store::ptr_eq(&store, &alias));
/// # Ok::<(), floatbuf::BufferError>(())
/// ```
pub struct Store<T: Element> {
    cells: Arc<[T::Cell]>,
}

impl<T: Element> Store<T> {
    /// Creates a store of `len` zeroed elements.
    pub fn new(len: usize) -> Self {
        (0..len).map(|_| T::default()).collect()
    }

    /// Creates a store holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.cells.get(index).map(T::load)
    }

    /// Overwrites the element at `index`.
    ///
    /// This bypasses any buffer's read-only flag: the flag belongs to a
    /// view, not to the store.
    pub fn set(&self, index: usize, value: T) -> Result<(), BufferError> {
        let cell = self.cells.get(index).ok_or(BufferError::IndexOutOfBounds {
            index,
            limit: self.cells.len(),
        })?;
        T::store(cell, value);
        Ok(())
    }

    /// Copies every element into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().map(T::load).collect()
    }

    /// Returns true if both handles address the same block.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.cells, &b.cells)
    }

    /// Number of live handles to this block.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.cells)
    }

    // Callers have already bounds-checked `index`.
    #[inline]
    pub(crate) fn read(&self, index: usize) -> T {
        T::load(&self.cells[index])
    }

    #[inline]
    pub(crate) fn write(&self, index: usize, value: T) {
        T::store(&self.cells[index], value);
    }
}

impl<T: Element> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Arc::clone(&self.cells),
        }
    }
}

impl<T: Element> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(T::new_cell).collect(),
        }
    }
}

impl<T: Element> From<Vec<T>> for Store<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Element> From<&[T]> for Store<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Element> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.len())
            .field("handles", &self.handle_count())
            .finish()
    }
}
