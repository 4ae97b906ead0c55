//! Real-world scenario benchmarks.
//!
//! These model what the game actually plays: individual note and effect
//! voices, and a full bar of music rendered through the engine.

mod engine;
mod voices;

pub use engine::bench_engine;
pub use voices::bench_voices;
