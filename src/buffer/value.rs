//! Value semantics over the remaining window.
//!
//! Hashing, equality and ordering look only at `[position, limit)`. Two
//! views over different data compare equal when their remaining elements
//! match, whatever their absolute indices.
//!
//! Equality and ordering share one total order on elements (see
//! [`Element::compare`]), so `Eq`, `Ord` and `Hash` agree with each other.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::element::Element;

use super::Buffer;

impl<T: Element> Buffer<T> {
    /// Rolling hash of the remaining elements: `h = 31 * h + bits(e)` with
    /// wrapping 32-bit arithmetic, where `bits` folds the element's
    /// canonical bit pattern into 32 bits.
    ///
    /// ```
    /// use floatbuf::DoubleBuffer;
    ///
    /// let mut a = DoubleBuffer::from_vec(vec![7.0, 1.0, 2.0]);
    /// a.set_position(1)?;
    /// let b = DoubleBuffer::from_vec(vec![1.0, 2.0]);
    /// assert_eq!(a.hash_code(), b.hash_code());
    /// # Ok::<(), floatbuf::BufferError>(())
    /// ```
    pub fn hash_code(&self) -> i32 {
        self.window()
            .fold(0i32, |h, e| h.wrapping_mul(31).wrapping_add(e.hash_bits()))
    }

    /// Lexicographic comparison of the remaining windows; when one is a
    /// prefix of the other, the shorter sorts first.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        self.window()
            .zip(other.window())
            .map(|(a, b)| a.compare(b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.remaining().cmp(&other.remaining()))
    }

    /// Remaining elements, read in order without moving the cursor.
    fn window(&self) -> impl Iterator<Item = T> + '_ {
        let start = self.cursor_index();
        (start..start + self.remaining()).map(move |i| self.store.read(i))
    }
}

impl<T: Element> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.remaining() == other.remaining()
            && self
                .window()
                .zip(other.window())
                .all(|(a, b)| a.compare(b).is_eq())
    }
}

impl<T: Element> Eq for Buffer<T> {}

impl<T: Element> PartialOrd for Buffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> Ord for Buffer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl<T: Element> Hash for Buffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<T: Element> fmt::Display for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} position={}, limit={}, capacity={}, mark ",
            T::BUFFER_NAME,
            self.position(),
            self.limit(),
            self.capacity()
        )?;
        match self.mark_value() {
            Some(mark) => write!(f, "at {}]", mark),
            None => write!(f, "is not set]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;
    use crate::buffer::{DoubleBuffer, FloatBuffer};

    #[test]
    fn test_hash_code_known_values() {
        let buf = DoubleBuffer::from_vec(vec![1.0, 2.0]);
        // 1.0 folds to 0x3FF00000, 2.0 to 0x40000000.
        let expected = 0x3FF0_0000i32.wrapping_mul(31).wrapping_add(0x4000_0000);
        assert_eq!(buf.hash_code(), expected);

        assert_eq!(DoubleBuffer::allocate(0).unwrap().hash_code(), 0);
    }

    #[test]
    fn test_hash_code_only_remaining() {
        let mut buf = DoubleBuffer::from_vec(vec![1.0, 2.0, 3.0]);
        let full = buf.hash_code();
        buf.set_position(1).unwrap();
        assert_ne!(buf.hash_code(), full);
        buf.set_position(3).unwrap();
        assert_eq!(buf.hash_code(), 0);
    }

    #[test]
    fn test_eq_ignores_absolute_position() {
        let mut a = DoubleBuffer::from_vec(vec![0.0, 4.0, 5.0]);
        a.set_position(1).unwrap();
        let b = DoubleBuffer::from_vec(vec![4.0, 5.0]);
        assert_eq!(a, b);
        assert_eq!(b, a);

        let c = DoubleBuffer::from_vec(vec![4.0, 6.0]);
        assert_ne!(a, c);

        let d = DoubleBuffer::from_vec(vec![4.0]);
        assert_ne!(a, d);
    }

    #[test]
    fn test_eq_nan_and_signed_zero() {
        let a = DoubleBuffer::from_vec(vec![f64::NAN]);
        let b = DoubleBuffer::from_vec(vec![f64::NAN]);
        assert_eq!(a, b);

        let pos = DoubleBuffer::from_vec(vec![0.0]);
        let neg = DoubleBuffer::from_vec(vec![-0.0]);
        assert_ne!(pos, neg);
        assert!(neg < pos);
    }

    #[test]
    fn test_compare_to_lexicographic() {
        let a = DoubleBuffer::from_vec(vec![1.0, 2.0]);
        let b = DoubleBuffer::from_vec(vec![1.0, 3.0]);
        let prefix = DoubleBuffer::from_vec(vec![1.0]);
        let nan = DoubleBuffer::from_vec(vec![f64::NAN]);

        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
        assert_eq!(prefix.compare_to(&a), Ordering::Less);
        assert_eq!(a.compare_to(&a), Ordering::Equal);
        assert_eq!(nan.compare_to(&b), Ordering::Greater);
    }

    fn std_hash<B: Hash>(value: &B) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_buffers_hash_equal() {
        let a = FloatBuffer::from_vec(vec![1.0, f32::NAN]);
        let mut b = FloatBuffer::from_vec(vec![9.0, 1.0, f32::NAN]);
        b.set_position(1).unwrap();
        assert_eq!(a, b);
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn test_display() {
        let mut buf = DoubleBuffer::allocate(8).unwrap();
        assert_eq!(
            buf.to_string(),
            "[DoubleBuffer position=0, limit=8, capacity=8, mark is not set]"
        );

        buf.set_position(2).unwrap().mark();
        buf.set_limit(5).unwrap();
        assert_eq!(
            buf.to_string(),
            "[DoubleBuffer position=2, limit=5, capacity=8, mark at 2]"
        );

        let floats = FloatBuffer::allocate(1).unwrap();
        assert!(floats.to_string().starts_with("[FloatBuffer"));
    }
}
