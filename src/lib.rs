//! floatbuf
//!
//! Cursor-based buffers over fixed-size floating-point storage.
//!
//! A [`Buffer`] is a view into a shared [`Store`]: a fixed window
//! `(offset, capacity)` plus its own `position`, `limit` and `mark`. It is
//! the primitive under higher-level numeric I/O code:
//!
//! - sequential and absolute reads/writes
//! - bulk transfer to and from slices and other buffers
//! - zero-copy slicing, duplication and read-only views
//! - value-based equality, ordering and hashing over the remaining elements
//!
//! The crate intentionally:
//! - does NOT do I/O
//! - does NOT convert byte order
//! - does NOT synchronize cursors across threads
//! - does NOT copy a store it can share
//!
//! # Example
//!
//! ```
//! use floatbuf::{BufferError, DoubleBuffer};
//!
//! fn main() -> Result<(), BufferError> {
//!     let mut buf = DoubleBuffer::allocate(4)?;
//!     buf.put(1.0)?.put(2.0)?;
//!     buf.flip();
//!
//!     let mut dst = [0.0; 2];
//!     buf.get_slice(&mut dst)?;
//!     assert_eq!(dst, [1.0, 2.0]);
//!
//!     let ro = buf.as_read_only_buffer();
//!     assert!(ro.is_read_only());
//!     Ok(())
//! }
//! ```
//!
//! # Shared views
//!
//! ```
//! use floatbuf::{DoubleBuffer, Store};
//!
//! let store: Store<f64> = Store::from(vec![0.0; 4]);
//! let mut left = DoubleBuffer::wrap(store.clone(), 0, 2)?;
//! let mut right = DoubleBuffer::wrap(store.clone(), 2, 2)?;
//!
//! left.put(1.0)?;
//! right.put(2.0)?;
//! assert_eq!(store.to_vec(), vec![1.0, 0.0, 2.0, 0.0]);
//! # Ok::<(), floatbuf::BufferError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod element;
mod error;
mod store;

//
// Public surface
//

pub use buffer::{Buffer, DoubleBuffer, FloatBuffer};
pub use config::{ABSOLUTE_MAX_CAPACITY, BufferConfig, DEFAULT_MAX_CAPACITY};
pub use element::Element;
pub use error::{BufferError, ErrorKind};
pub use store::{HeapFactory, Store, StoreFactory};
