//! Backing storage shared between buffer views.
//!
//! - [`Store`] - Reference-counted, fixed-length block of elements
//! - [`StoreFactory`] - Produces fresh stores for `allocate`
//! - [`HeapFactory`] - Default factory, allocates on the heap
//!
//! A store is never copied by the buffer layer: wrapping, slicing and
//! duplicating all clone the handle, not the data.

mod factory;
mod shared;

pub use factory::{HeapFactory, StoreFactory};
pub use shared::Store;
