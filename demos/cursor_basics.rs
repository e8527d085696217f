//! Fill, flip and drain a buffer, then compact and keep writing.
//!
//! Run with:
//!     RUST_LOG=floatbuf=trace cargo run --example cursor_basics

use floatbuf::DoubleBuffer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut buf = DoubleBuffer::allocate(8)?;
    println!("allocated: {}", buf);

    // Write a few samples
    for i in 0..5 {
        buf.put(i as f64 * 0.5)?;
    }
    println!("after 5 puts: {}", buf);

    // Switch to reading
    buf.flip();
    let first = buf.get()?;
    let second = buf.get()?;
    println!("read {} and {}: {}", first, second, buf);

    // Keep the unread tail and make room for more
    buf.compact()?;
    println!("compacted: {}", buf);

    buf.put_slice(&[10.0, 11.0])?;
    buf.flip();

    let mut out = vec![0.0; buf.remaining()];
    buf.get_slice(&mut out)?;
    println!("drained: {:?}", out);
    println!("hash of empty window: {}", buf.hash_code());

    Ok(())
}
