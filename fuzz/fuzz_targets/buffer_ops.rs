#![no_main]

use libfuzzer_sys::fuzz_target;
use floatbuf::DoubleBuffer;

fuzz_target!(|data: Vec<u8>| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let mut buf = DoubleBuffer::allocate(capacity as usize % 64).unwrap();
    let mut scratch = [0.0f64; 8];

    for pair in ops.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0) as usize;
        let value = arg as f64 - 128.0;

        // Errors are expected; only panics and broken invariants are bugs.
        let _ = match op % 16 {
            0 => buf.get().map(|_| ()),
            1 => buf.put(value).map(|_| ()),
            2 => buf.get_at(arg).map(|_| ()),
            3 => buf.put_at(arg, value).map(|_| ()),
            4 => buf.set_position(arg).map(|_| ()),
            5 => buf.set_limit(arg).map(|_| ()),
            6 => {
                buf.mark();
                Ok(())
            }
            7 => buf.reset().map(|_| ()),
            8 => {
                buf.flip();
                Ok(())
            }
            9 => {
                buf.clear();
                Ok(())
            }
            10 => buf.compact().map(|_| ()),
            11 => buf
                .get_into(&mut scratch, arg % 10, arg / 10 % 10)
                .map(|_| ()),
            12 => buf
                .put_from(&scratch, arg % 10, arg / 10 % 10)
                .map(|_| ()),
            13 => {
                let view = buf.slice();
                buf.put_buffer(&view).map(|_| ())
            }
            14 => {
                buf = buf.duplicate();
                Ok(())
            }
            _ => {
                buf.rewind();
                Ok(())
            }
        };

        // Verify: cursor invariants hold after every operation
        assert!(buf.position() <= buf.limit());
        assert!(buf.limit() <= buf.capacity());
        if let Some(mark) = buf.mark_value() {
            assert!(mark <= buf.position());
        }
        assert_eq!(buf.remaining(), buf.limit() - buf.position());
    }

    // Verify: value semantics are reflexive and consistent
    let dup = buf.duplicate();
    assert_eq!(buf, dup);
    assert_eq!(buf.hash_code(), dup.hash_code());
    assert!(buf.compare_to(&dup).is_eq());
});
