//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with the ergonomics needed
//! for voice design: note-on events, activity tracking and block-based
//! rendering. The `extensions` module adds fluent helpers so voices can be
//! authored with a clear, chainable API.

/// Multiply two signals together (envelope × oscillator).
pub mod amplify;
/// Envelope node exposing the breakpoint automation curve.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.mix()`, etc.).
pub mod extensions;
/// Topology-preserving filter node with multiple responses.
pub mod filter;
/// Additive layering of parallel graphs.
pub mod mix;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators and noise sources.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;
