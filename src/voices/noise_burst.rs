//! Noise burst voice.
//!
//! Band-passed white noise with an exponential decay: the rush of air when
//! a door slides open. The request frequency is the band centre.

use crate::dsp::envelope::Envelope;
use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, filter::FilterNode, node::GraphNode,
    oscillator::OscNode,
};

/// Create a noise burst lasting `duration` seconds.
pub fn noise_burst(duration: f32, level: f32) -> impl GraphNode {
    OscNode::noise()
        .through(FilterNode::bandpass(1_000.0).with_q(1.0).tracking())
        .amplify(EnvNode::new(
            Envelope::from_level(level).exponential_to(0.01, duration),
        ))
}
