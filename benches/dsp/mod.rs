//! Benchmarks for low-level DSP primitives.

mod envelope;
mod filter;
mod graph;
mod oscillator;

pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use graph::bench_graph;
pub use oscillator::bench_oscillator;
