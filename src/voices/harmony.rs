//! Harmony voice: a quiet sine pad that fills in chord tones.

use crate::dsp::envelope::Envelope;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Peak level of a harmony note.
pub const HARMONY_LEVEL: f32 = 0.04;

/// Create a harmony voice lasting `duration` seconds with peak `level`.
pub fn harmony(duration: f32, level: f32) -> impl GraphNode {
    OscNode::sine().amplify(EnvNode::new(
        Envelope::from_level(0.0)
            .linear_to(level, 0.02)
            .step_to(level * 0.75, 0.5 * duration)
            .exponential_to(0.001, duration),
    ))
}
