//! `Element` implementations for `f64` and `f32`.

use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicU32, AtomicU64};

use ordered_float::OrderedFloat;

use super::Element;

/// Bit pattern every `f64` NaN is collapsed to before hashing or ordering.
const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Bit pattern every `f32` NaN is collapsed to before hashing or ordering.
const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

fn canonical_bits_f64(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_F64
    } else {
        value.to_bits()
    }
}

fn canonical_bits_f32(value: f32) -> u32 {
    if value.is_nan() {
        CANONICAL_NAN_F32
    } else {
        value.to_bits()
    }
}

impl Element for f64 {
    type Cell = AtomicU64;

    const BUFFER_NAME: &'static str = "DoubleBuffer";

    fn new_cell(value: Self) -> Self::Cell {
        AtomicU64::new(value.to_bits())
    }

    #[inline]
    fn load(cell: &Self::Cell) -> Self {
        f64::from_bits(cell.load(atomic::Ordering::Relaxed))
    }

    #[inline]
    fn store(cell: &Self::Cell, value: Self) {
        cell.store(value.to_bits(), atomic::Ordering::Relaxed);
    }

    fn hash_bits(self) -> i32 {
        let bits = canonical_bits_f64(self);
        (bits as i32).wrapping_add((bits >> 32) as i32)
    }

    fn compare(self, other: Self) -> Ordering {
        // OrderedFloat ties -0.0 with +0.0; the signed bit pattern splits them.
        OrderedFloat(self).cmp(&OrderedFloat(other)).then_with(|| {
            (canonical_bits_f64(self) as i64).cmp(&(canonical_bits_f64(other) as i64))
        })
    }
}

impl Element for f32 {
    type Cell = AtomicU32;

    const BUFFER_NAME: &'static str = "FloatBuffer";

    fn new_cell(value: Self) -> Self::Cell {
        AtomicU32::new(value.to_bits())
    }

    #[inline]
    fn load(cell: &Self::Cell) -> Self {
        f32::from_bits(cell.load(atomic::Ordering::Relaxed))
    }

    #[inline]
    fn store(cell: &Self::Cell, value: Self) {
        cell.store(value.to_bits(), atomic::Ordering::Relaxed);
    }

    fn hash_bits(self) -> i32 {
        canonical_bits_f32(self) as i32
    }

    fn compare(self, other: Self) -> Ordering {
        OrderedFloat(self).cmp(&OrderedFloat(other)).then_with(|| {
            (canonical_bits_f32(self) as i32).cmp(&(canonical_bits_f32(other) as i32))
        })
    }
}
