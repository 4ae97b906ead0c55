//! Melody voice.
//!
//! A soft sine lead with a faint triangle an octave above it. The triangle
//! adds just enough shimmer for the tune to sit on top of the bass and
//! harmony without sounding like a test tone.
//!
//! # How It Works
//!
//! 1. Sine oscillator at the note pitch carries the melody
//! 2. Amplitude envelope: 10 ms linear attack to the peak, a drop to a
//!    plateau at one fifth of the note, then an exponential fade that reaches
//!    near-silence exactly when the note ends
//! 3. Triangle at twice the pitch, held flat at a sixth of the peak for the
//!    whole note
//!
//! # Variations
//!
//! - Raise the shimmer ratio = brighter, more "music box"
//! - Move the plateau step later = more legato phrasing

use crate::dsp::envelope::Envelope;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Peak level of a melody note.
pub const MELODY_LEVEL: f32 = 0.12;

/// Create a melody voice lasting `duration` seconds with peak `level`.
pub fn melody(duration: f32, level: f32) -> impl GraphNode {
    let body = OscNode::sine().amplify(EnvNode::new(
        Envelope::from_level(0.0)
            .linear_to(level, 0.01)
            .step_to(level * (0.08 / MELODY_LEVEL), 0.2 * duration)
            .exponential_to(0.001, duration),
    ));

    let shimmer = OscNode::triangle()
        .with_ratio(2.0)
        .amplify(EnvNode::hold(level * (0.02 / MELODY_LEVEL), duration));

    body.mix(shimmer)
}
