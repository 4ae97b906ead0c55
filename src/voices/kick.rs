//! Kick drum voice.
//!
//! A synthesized kick using a sine wave with a pitch envelope. The pitch
//! starts at the note frequency and drops quickly, creating the "punch" of
//! an electronic kick.
//!
//! # How It Works
//!
//! 1. Sine oscillator provides the body (pure, deep tone)
//! 2. Exponential pitch sweep down to 5/8 of the start over 80% of the hit
//!    (80 Hz to 50 Hz in 80 ms for the default 0.1 s kick)
//! 3. Amplitude starts at the peak and decays exponentially to 0.01

use crate::dsp::envelope::Envelope;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Start pitch of the kick.
pub const KICK_FREQUENCY: f32 = 80.0;
/// Length of one kick hit, independent of tempo.
pub const KICK_DURATION: f32 = 0.1;
pub const KICK_LEVEL: f32 = 0.12;

/// Create a kick drum voice.
pub fn kick(duration: f32, level: f32) -> impl GraphNode {
    OscNode::sine()
        .with_sweep(Envelope::from_level(1.0).exponential_to(50.0 / 80.0, 0.8 * duration))
        .amplify(EnvNode::new(
            Envelope::from_level(level).exponential_to(0.01, duration),
        ))
}
