//! Chime voice.
//!
//! A bell-like sine with a 50 ms linear swell and a long exponential ring.
//! Four of these in a rising arpeggio make the level-complete fanfare.

use crate::dsp::envelope::Envelope;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Create a chime lasting `duration` seconds with peak `level`.
pub fn chime(duration: f32, level: f32) -> impl GraphNode {
    OscNode::sine().amplify(EnvNode::new(
        Envelope::from_level(0.0)
            .linear_to(level, 0.05)
            .exponential_to(0.01, duration),
    ))
}
