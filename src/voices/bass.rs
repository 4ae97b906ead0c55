//! Bass voice.
//!
//! A triangle wave rounded off by a low-pass filter. Triangles only carry
//! weak odd harmonics, and the 600 Hz cutoff with a slight resonance bump
//! leaves a warm, woody line under the melody.
//!
//! # How It Works
//!
//! 1. Triangle oscillator at the note pitch
//! 2. Low-pass filter at 600 Hz, Q 1
//! 3. Amplitude envelope: 20 ms attack, plateau from 70% of the note, then
//!    an exponential fade to 0.01 at the end

use crate::dsp::envelope::Envelope;
use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, filter::FilterNode, node::GraphNode,
    oscillator::OscNode,
};

/// Peak level of a bass note.
pub const BASS_LEVEL: f32 = 0.18;

/// Create a bass voice lasting `duration` seconds with peak `level`.
pub fn bass(duration: f32, level: f32) -> impl GraphNode {
    OscNode::triangle()
        .through(FilterNode::lowpass(600.0).with_q(1.0))
        .amplify(EnvNode::new(
            Envelope::from_level(0.0)
                .linear_to(level, 0.02)
                .step_to(level * (0.15 / BASS_LEVEL), 0.7 * duration)
                .exponential_to(0.01, duration),
        ))
}
