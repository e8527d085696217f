//! Element types a buffer can hold.
//!
//! - [`Element`] - How a value is stored in a shared cell, hashed and ordered
//!
//! `f64` and `f32` implement it. Buffer code is generic over `Element` and
//! is monomorphized per type, so the read/write path has no dynamic
//! dispatch.

mod float;

use std::cmp::Ordering;
use std::fmt;

/// A floating-point type storable in a [`Store`](crate::Store).
///
/// Values live in `Cell`s so that several views can read and write the same
/// store through shared handles. Cells are accessed with relaxed ordering:
/// no atomicity or visibility guarantee is made across elements.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Shared-mutable storage slot for one value.
    type Cell: Send + Sync;

    /// Type name used by `Display` for buffers of this element.
    const BUFFER_NAME: &'static str;

    /// Creates a cell holding `value`.
    fn new_cell(value: Self) -> Self::Cell;

    /// Reads the value held in `cell`.
    fn load(cell: &Self::Cell) -> Self;

    /// Overwrites the value held in `cell`.
    fn store(cell: &Self::Cell, value: Self);

    /// Folded 32-bit contribution of this value to a buffer hash.
    ///
    /// Derived from the canonical bit pattern, so every NaN contributes the
    /// same value.
    fn hash_bits(self) -> i32;

    /// Total order over all values: NaN is greater than everything else and
    /// equal to itself, `-0.0` sorts before `+0.0`, anything else compares
    /// numerically.
    fn compare(self, other: Self) -> Ordering;
}
