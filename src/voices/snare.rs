//! Snare drum voice.
//!
//! A synthesized snare combining a tonal body with noise for the rattle.
//! Real snares have metal wires stretched across the bottom head that buzz
//! when the drum is struck; high-passed noise stands in for them.
//!
//! # How It Works
//!
//! 1. Sine body sweeping down by a third of its pitch (180 Hz to 120 Hz)
//! 2. White noise through a 4 kHz high-pass for the wire buzz
//! 3. Each layer has its own exponential decay; the rattle lasts half as
//!    long as the body

use crate::dsp::envelope::Envelope;
use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, filter::FilterNode, node::GraphNode,
    oscillator::OscNode,
};

pub const SNARE_FREQUENCY: f32 = 180.0;
pub const SNARE_DURATION: f32 = 0.08;
pub const SNARE_LEVEL: f32 = 0.06;

/// Create a snare drum voice.
pub fn snare(duration: f32, level: f32) -> impl GraphNode {
    let body = OscNode::sine()
        .with_sweep(Envelope::from_level(1.0).exponential_to(120.0 / 180.0, 0.625 * duration))
        .amplify(EnvNode::new(
            Envelope::from_level(level).exponential_to(0.01, duration),
        ));

    let rattle = OscNode::noise()
        .through(FilterNode::highpass(4_000.0))
        .amplify(EnvNode::new(
            Envelope::from_level(level * 0.5).exponential_to(0.01, 0.5 * duration),
        ));

    body.mix(rattle)
}
