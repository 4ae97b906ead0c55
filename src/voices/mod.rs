//! Pre-built voices, one per timbre.
//!
//! Each voice is a ready-to-use node graph parameterised by its duration and
//! peak level. The music recipes shape a note; the effect recipes are the
//! raw material the sound-effect player combines into door, collision and
//! fanfare sounds.
//!
//! # Example
//!
//! ```ignore
//! use devilbox_audio::voices;
//!
//! // Music
//! let melody = voices::melody(0.11, voices::MELODY_LEVEL);
//! let bass = voices::bass(0.225, voices::BASS_LEVEL);
//! let kick = voices::kick(voices::KICK_DURATION, voices::KICK_LEVEL);
//!
//! // Effects
//! let click = voices::blip(0.05, 0.2, 1.0, 0.0, voices::BLIP_FLOOR);
//! let whoosh = voices::noise_burst(0.15, 0.1);
//! ```

mod bass;
mod blip;
mod chime;
mod harmony;
mod hihat;
mod kick;
mod melody;
mod noise_burst;
mod snare;

pub use bass::{bass, BASS_LEVEL};
pub use blip::{blip, BLIP_FLOOR};
pub use chime::chime;
pub use harmony::{harmony, HARMONY_LEVEL};
pub use hihat::{hihat, HIHAT_CUTOFF, HIHAT_DURATION, HIHAT_LEVEL};
pub use kick::{kick, KICK_DURATION, KICK_FREQUENCY, KICK_LEVEL};
pub use melody::{melody, MELODY_LEVEL};
pub use noise_burst::noise_burst;
pub use snare::{snare, SNARE_DURATION, SNARE_FREQUENCY, SNARE_LEVEL};

use crate::{
    graph::{extensions::NodeExt, node::GraphNode},
    synth::{NoteRequest, Timbre},
};

/// Build the node graph for a request.
pub fn build(request: &NoteRequest) -> Box<dyn GraphNode> {
    let d = request.duration.max(0.0);
    let level = request.level.max(0.0);

    match request.timbre {
        Timbre::Melody => melody(d, level).boxed(),
        Timbre::Bass => bass(d, level).boxed(),
        Timbre::Harmony => harmony(d, level).boxed(),
        Timbre::PercussionLow => kick(d, level).boxed(),
        Timbre::PercussionMid => snare(d, level).boxed(),
        Timbre::PercussionHiHat => hihat(d, level).boxed(),
        Timbre::Blip {
            glide,
            glide_fraction,
            floor,
        } => blip(d, level, glide, glide_fraction, floor).boxed(),
        Timbre::NoiseBurst => noise_burst(d, level).boxed(),
        Timbre::Chime => chime(d, level).boxed(),
    }
}
