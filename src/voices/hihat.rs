//! Hi-hat voice (closed).
//!
//! A tight, short burst of filtered noise. The request frequency is the
//! high-pass cutoff, so the same recipe can be tuned darker or brighter.
//!
//! # How It Works
//!
//! 1. White noise provides the "metallic" character
//! 2. High-pass filter at the note frequency (9 kHz by default)
//! 3. Very short exponential decay for that tight "tss" sound

use crate::dsp::envelope::Envelope;
use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, filter::FilterNode, node::GraphNode,
    oscillator::OscNode,
};

/// High-pass cutoff of the hi-hat.
pub const HIHAT_CUTOFF: f32 = 9_000.0;
pub const HIHAT_DURATION: f32 = 0.03;
pub const HIHAT_LEVEL: f32 = 0.025;

/// Create a closed hi-hat voice.
pub fn hihat(duration: f32, level: f32) -> impl GraphNode {
    OscNode::noise()
        .through(FilterNode::highpass(HIHAT_CUTOFF).tracking())
        .amplify(EnvNode::new(
            Envelope::from_level(level).exponential_to(0.01, duration),
        ))
}
