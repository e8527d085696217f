#![no_main]

use libfuzzer_sys::fuzz_target;
use floatbuf::{DoubleBuffer, Store};

fuzz_target!(|data: Vec<u8>| {
    if data.len() < 3 {
        return;
    }
    let len = data[0] as usize % 32 + 1;
    let split = data[1] as usize % (len + 1);
    let store: Store<f64> = Store::new(len);

    let mut left = DoubleBuffer::wrap(store.clone(), 0, split).unwrap();
    let mut right = DoubleBuffer::wrap(store.clone(), split, len - split).unwrap();
    let ro = right.as_read_only_buffer();

    for &byte in &data[2..] {
        let value = byte as f64;
        if byte & 1 == 0 {
            let _ = left.put(value);
        } else {
            let _ = right.put(value);
        }
    }

    // Verify: each view only wrote inside its own window
    let contents = store.to_vec();
    for (i, &v) in contents.iter().enumerate() {
        if i < split {
            assert!(i < left.position() || v == 0.0);
            if v != 0.0 {
                assert_eq!(v as u8 & 1, 0);
            }
        } else {
            assert!(i < right.position() || v == 0.0);
            if v != 0.0 {
                assert_eq!(v as u8 & 1, 1);
            }
        }
    }

    // Verify: the read-only twin sees the writes but its cursor never moved
    assert_eq!(ro.position(), split);
    for i in split..right.position() {
        assert_eq!(ro.get_at(i).unwrap(), contents[i]);
    }
});
