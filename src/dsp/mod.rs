//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components do not allocate while rendering, so they are safe to
//! embed directly inside voices that live on the audio thread. They stay
//! focused on the signal-processing math; the graph combinators layer the
//! orchestration on top.

/// Breakpoint automation envelope (step, linear and exponential ramps).
pub mod envelope;
/// State-variable filter implementation with multiple responses.
pub mod filter;
/// Oscillator waveforms and noise sources.
pub mod oscillator;

pub use envelope::{Envelope, EnvelopeState};
