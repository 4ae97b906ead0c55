//! Blip voice: the workhorse of the sound effects.
//!
//! A sine that starts at the note frequency, glides exponentially to
//! `glide` times that frequency, and decays from `level` to near-silence.
//! Collisions, wall bounces, door motors and UI clicks are all blips with
//! different numbers. Door sounds fade to a higher floor than the rest.
//!
//! ```text
//!   pitch                         level
//!   f ──╲                         level ─╲
//!        ╲___ glide·f                     ╲__
//!   |── glide_fraction·d ──|              ───╲___ floor
//!   |──────────── d ───────────|    |──────── d ────────|
//! ```

use crate::dsp::envelope::Envelope;
use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Level most blips decay to.
pub const BLIP_FLOOR: f32 = 0.001;

/// Create a blip lasting `duration` seconds.
///
/// `glide` of 1.0 keeps a steady pitch; `glide_fraction` is the share of the
/// duration the glide takes. The level falls exponentially to `floor` at the end.
pub fn blip(
    duration: f32,
    level: f32,
    glide: f32,
    glide_fraction: f32,
    floor: f32,
) -> impl GraphNode {
    let glide_time = (glide_fraction * duration).clamp(0.0, duration);

    OscNode::sine()
        .with_sweep(Envelope::from_level(1.0).exponential_to(glide, glide_time))
        .amplify(EnvNode::new(
            Envelope::from_level(level).exponential_to(floor, duration),
        ))
}
