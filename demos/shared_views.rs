//! Several views over one store: slices, duplicates and a read-only view.
//!
//! Run with:
//!     cargo run --example shared_views

use floatbuf::{BufferError, DoubleBuffer, Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store: Store<f64> = Store::from((1u8..=6).map(f64::from).collect::<Vec<_>>());
    let mut whole = DoubleBuffer::wrap_all(store.clone());

    // Two halves, each with its own cursor
    whole.set_position(3)?;
    let mut back = whole.slice();
    whole.flip();
    let mut front = whole.slice();
    println!("front: {}  back: {}", front, back);

    front.put_at(0, 100.0)?;
    back.put_at(0, 400.0)?;
    println!("store after writes: {:?}", store.to_vec());

    // A read-only view sees the writes but cannot make any
    let mut ro = front.as_read_only_buffer();
    println!("read-only front[0] = {}", ro.get_at(0)?);
    match ro.put(0.0) {
        Err(BufferError::ReadOnly) => println!("read-only view rejected put"),
        other => println!("unexpected: {:?}", other.map(|b| b.position())),
    }

    // Compare windows by value
    let dup = back.duplicate();
    println!("back == dup: {}", back == dup);
    println!("front cmp back: {:?}", front.compare_to(&back));
    println!("store handles alive: {}", store.handle_count());

    Ok(())
}
