//! Allocation policy.
//!
//! - [`BufferConfig`] - Upper bound on the capacity a factory will allocate
//!
//! # Example
//!
//! ```
//! use floatbuf::{BufferConfig, DoubleBuffer, HeapFactory};
//!
//! let factory = HeapFactory::new(BufferConfig::new(1024)?);
//! let buf = DoubleBuffer::allocate_in(&factory, 512)?;
//! assert_eq!(buf.capacity(), 512);
//!
//! assert!(DoubleBuffer::allocate_in(&factory, 2048).is_err());
//! # Ok::<(), floatbuf::BufferError>(())
//! ```

use crate::error::BufferError;

/// Default maximum capacity: the largest count a 32-bit signed index can
/// address.
pub const DEFAULT_MAX_CAPACITY: usize = i32::MAX as usize;

/// Hard ceiling on any capacity, so that a store of 64-bit cells never
/// exceeds `isize::MAX` bytes.
pub const ABSOLUTE_MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<u64>();

/// Configuration applied when allocating fresh stores.
///
/// A request for more than `max_capacity` elements is rejected with
/// [`BufferError::InvalidArgument`] before any memory is reserved.
///
/// # Example
///
/// ```
/// use floatbuf::BufferConfig;
///
/// let config = BufferConfig::default().with_max_capacity(4096);
/// assert_eq!(config.max_capacity(), 4096);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferConfig {
    /// Largest capacity a factory using this config will allocate.
    max_capacity: usize,
}

impl BufferConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `max_capacity` is zero or
    /// larger than [`ABSOLUTE_MAX_CAPACITY`].
    pub fn new(max_capacity: usize) -> Result<Self, BufferError> {
        if max_capacity == 0 {
            return Err(BufferError::invalid_argument(
                "max_capacity must be non-zero",
            ));
        }

        if max_capacity > ABSOLUTE_MAX_CAPACITY {
            return Err(BufferError::invalid_argument(format!(
                "max_capacity {} exceeds the absolute maximum {}",
                max_capacity, ABSOLUTE_MAX_CAPACITY
            )));
        }

        Ok(Self { max_capacity })
    }

    /// Sets the maximum capacity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`BufferConfig::validate`] to check it.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Returns the maximum capacity.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use floatbuf::BufferConfig;
    ///
    /// let config = BufferConfig::default().with_max_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BufferError> {
        Self::new(self.max_capacity).map(|_| ())
    }

    /// Checks a requested capacity against this configuration.
    pub(crate) fn check_capacity(&self, capacity: usize) -> Result<(), BufferError> {
        self.validate()?;
        if capacity > self.max_capacity {
            return Err(BufferError::invalid_argument(format!(
                "capacity {} exceeds maximum {}",
                capacity, self.max_capacity
            )));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}
