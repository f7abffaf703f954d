//! Real-world scenario benchmarks.
//!
//! The full core driven block by block the way a plugin host would.

mod core;

pub use self::core::bench_core;
