//! Store factories used by `allocate`.

use crate::config::BufferConfig;
use crate::element::Element;
use crate::error::BufferError;

use super::Store;

/// Produces fresh stores when a buffer is allocated.
///
/// The factory decides where storage lives; buffers only report the
/// decision through [`Buffer::is_direct`](crate::Buffer::is_direct).
pub trait StoreFactory<T: Element> {
    /// Allocates a zeroed store of exactly `capacity` elements.
    ///
    /// Implementations reject capacities their configuration does not allow
    /// with [`BufferError::InvalidArgument`].
    fn allocate(&self, capacity: usize) -> Result<Store<T>, BufferError>;

    /// Whether stores from this factory live outside ordinary heap memory.
    fn is_direct(&self) -> bool {
        false
    }
}

/// The default factory: zeroed heap allocations bounded by a
/// [`BufferConfig`].
///
/// # Example
///
/// ```
/// use floatbuf::{BufferConfig, HeapFactory, Store, StoreFactory};
///
/// let factory = HeapFactory::new(BufferConfig::new(8)?);
/// let store: Store<f64> = factory.allocate(8)?;
/// assert_eq!(store.len(), 8);
/// assert!(!StoreFactory::<f64>::is_direct(&factory));
/// # Ok::<(), floatbuf::BufferError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapFactory {
    config: BufferConfig,
}

impl HeapFactory {
    /// Creates a factory applying `config`.
    pub const fn new(config: BufferConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }
}

impl<T: Element> StoreFactory<T> for HeapFactory {
    fn allocate(&self, capacity: usize) -> Result<Store<T>, BufferError> {
        self.config.check_capacity(capacity)?;
        Ok(Store::new(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_within_limit() {
        let factory = HeapFactory::new(BufferConfig::new(4).unwrap());
        let store: Store<f64> = factory.allocate(4).unwrap();
        assert_eq!(store.to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_allocate_over_limit() {
        let factory = HeapFactory::new(BufferConfig::new(4).unwrap());
        let result: Result<Store<f32>, _> = factory.allocate(5);
        assert!(matches!(result, Err(BufferError::InvalidArgument { .. })));
    }

    #[test]
    fn test_default_is_heap() {
        let factory = HeapFactory::default();
        assert!(!StoreFactory::<f64>::is_direct(&factory));
        assert_eq!(factory.config(), &BufferConfig::default());
    }
}
