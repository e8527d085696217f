// Property tests for cursor invariants and value semantics
// A plain-Vec model is driven alongside the real buffer; after every step
// the cursor invariants must hold and both must agree on state and data.

use floatbuf::{DoubleBuffer, ErrorKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Get,
    Put(f64),
    GetAt(usize),
    PutAt(usize, f64),
    SetPosition(usize),
    SetLimit(usize),
    Mark,
    Reset,
    Clear,
    Flip,
    Rewind,
    Compact,
    GetBulk(usize),
    PutBulk(Vec<f64>),
}

fn value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0..1000.0f64,
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Get),
        value().prop_map(Op::Put),
        (0..20usize).prop_map(Op::GetAt),
        (0..20usize, value()).prop_map(|(i, v)| Op::PutAt(i, v)),
        (0..20usize).prop_map(Op::SetPosition),
        (0..20usize).prop_map(Op::SetLimit),
        Just(Op::Mark),
        Just(Op::Reset),
        Just(Op::Clear),
        Just(Op::Flip),
        Just(Op::Rewind),
        Just(Op::Compact),
        (1..6usize).prop_map(Op::GetBulk),
        prop::collection::vec(value(), 1..6).prop_map(Op::PutBulk),
    ]
}

/// Reference model of a writable buffer over its own storage.
#[derive(Debug)]
struct Model {
    data: Vec<f64>,
    position: usize,
    limit: usize,
    mark: Option<usize>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            position: 0,
            limit: capacity,
            mark: None,
        }
    }

    fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Applies `op`, returning the error kind the buffer must report.
    fn apply(&mut self, op: &Op) -> Option<ErrorKind> {
        match op {
            Op::Get => {
                if self.remaining() == 0 {
                    return Some(ErrorKind::Underflow);
                }
                self.position += 1;
            }
            Op::Put(v) => {
                if self.remaining() == 0 {
                    return Some(ErrorKind::Overflow);
                }
                self.data[self.position] = *v;
                self.position += 1;
            }
            Op::GetAt(i) => {
                if *i >= self.limit {
                    return Some(ErrorKind::OutOfBounds);
                }
            }
            Op::PutAt(i, v) => {
                if *i >= self.limit {
                    return Some(ErrorKind::OutOfBounds);
                }
                self.data[*i] = *v;
            }
            Op::SetPosition(p) => {
                if *p > self.limit {
                    return Some(ErrorKind::InvalidArgument);
                }
                if self.mark.is_some_and(|m| m > *p) {
                    self.mark = None;
                }
                self.position = *p;
            }
            Op::SetLimit(l) => {
                if *l > self.data.len() {
                    return Some(ErrorKind::InvalidArgument);
                }
                if self.mark.is_some_and(|m| m > *l) {
                    self.mark = None;
                }
                self.position = self.position.min(*l);
                self.limit = *l;
            }
            Op::Mark => self.mark = Some(self.position),
            Op::Reset => match self.mark {
                Some(m) => self.position = m,
                None => return Some(ErrorKind::InvalidMark),
            },
            Op::Clear => {
                self.position = 0;
                self.limit = self.data.len();
                self.mark = None;
            }
            Op::Flip => {
                self.limit = self.position;
                self.position = 0;
                self.mark = None;
            }
            Op::Rewind => {
                self.position = 0;
                self.mark = None;
            }
            Op::Compact => {
                let n = self.remaining();
                self.data.copy_within(self.position..self.limit, 0);
                self.position = n;
                self.limit = self.data.len();
                self.mark = None;
            }
            Op::GetBulk(n) => {
                if self.remaining() < *n {
                    return Some(ErrorKind::Underflow);
                }
                self.position += n;
            }
            Op::PutBulk(values) => {
                if self.remaining() < values.len() {
                    return Some(ErrorKind::Overflow);
                }
                self.data[self.position..self.position + values.len()].copy_from_slice(values);
                self.position += values.len();
            }
        }
        None
    }
}

fn run(buf: &mut DoubleBuffer, op: &Op) -> Option<ErrorKind> {
    let result = match op {
        Op::Get => buf.get().map(|_| ()),
        Op::Put(v) => buf.put(*v).map(|_| ()),
        Op::GetAt(i) => buf.get_at(*i).map(|_| ()),
        Op::PutAt(i, v) => buf.put_at(*i, *v).map(|_| ()),
        Op::SetPosition(p) => buf.set_position(*p).map(|_| ()),
        Op::SetLimit(l) => buf.set_limit(*l).map(|_| ()),
        Op::Mark => {
            buf.mark();
            Ok(())
        }
        Op::Reset => buf.reset().map(|_| ()),
        Op::Clear => {
            buf.clear();
            Ok(())
        }
        Op::Flip => {
            buf.flip();
            Ok(())
        }
        Op::Rewind => {
            buf.rewind();
            Ok(())
        }
        Op::Compact => buf.compact().map(|_| ()),
        Op::GetBulk(n) => {
            let mut dst = vec![0.0; *n];
            buf.get_slice(&mut dst).map(|_| ())
        }
        Op::PutBulk(values) => buf.put_slice(values).map(|_| ()),
    };
    result.err().map(|e| e.kind())
}

proptest! {
    #[test]
    fn prop_buffer_matches_model(capacity in 0..16usize, ops in prop::collection::vec(op(), 0..64)) {
        let mut buf = DoubleBuffer::allocate(capacity).unwrap();
        let mut model = Model::new(capacity);

        for op in &ops {
            let expected = model.apply(op);
            let actual = run(&mut buf, op);
            prop_assert_eq!(actual, expected, "op {:?}", op);

            prop_assert!(buf.position() <= buf.limit());
            prop_assert!(buf.limit() <= buf.capacity());
            if let Some(mark) = buf.mark_value() {
                prop_assert!(mark <= buf.position());
            }
            prop_assert_eq!(buf.position(), model.position);
            prop_assert_eq!(buf.limit(), model.limit);
            prop_assert_eq!(buf.mark_value(), model.mark);
        }

        let data = buf.array().to_vec();
        prop_assert_eq!(data.len(), model.data.len());
        for (a, b) in data.iter().zip(&model.data) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn prop_allocate_full_window(capacity in 0..4096usize) {
        let buf = DoubleBuffer::allocate(capacity).unwrap();
        prop_assert_eq!(buf.position(), 0);
        prop_assert_eq!(buf.limit(), capacity);
        prop_assert_eq!(buf.remaining(), capacity);
    }

    #[test]
    fn prop_slice_and_duplicate_equal_source(
        values in prop::collection::vec(value(), 0..32),
        start in 0..32usize,
    ) {
        let mut buf = DoubleBuffer::from_vec(values.clone());
        buf.set_position(start.min(values.len())).unwrap();

        let slice = buf.slice();
        let dup = buf.duplicate();
        prop_assert_eq!(slice.capacity(), buf.remaining());
        prop_assert_eq!(&slice, &buf);
        prop_assert_eq!(&dup, &buf);
        prop_assert_eq!(slice.hash_code(), buf.hash_code());
        prop_assert_eq!(dup.compare_to(&buf), std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_compare_is_antisymmetric(
        a in prop::collection::vec(value(), 0..8),
        b in prop::collection::vec(value(), 0..8),
    ) {
        let x = DoubleBuffer::from_vec(a);
        let y = DoubleBuffer::from_vec(b);
        prop_assert_eq!(x.compare_to(&y), y.compare_to(&x).reverse());
        prop_assert_eq!(x == y, x.compare_to(&y).is_eq());
        if x == y {
            prop_assert_eq!(x.hash_code(), y.hash_code());
        }
    }

    #[test]
    fn prop_compact_moves_window(
        values in prop::collection::vec(value(), 1..32),
        start in 0..32usize,
    ) {
        let mut buf = DoubleBuffer::from_vec(values.clone());
        let start = start % values.len();
        buf.set_position(start).unwrap();
        let window = values[start..].to_vec();

        buf.compact().unwrap();
        prop_assert_eq!(buf.position(), window.len());
        prop_assert_eq!(buf.limit(), buf.capacity());
        for (i, v) in window.iter().enumerate() {
            prop_assert_eq!(buf.get_at(i).unwrap().to_bits(), v.to_bits());
        }
    }
}
