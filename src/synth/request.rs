#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::Bus;

/// A fixed synthesis recipe for one instrument role.
///
/// The first six are the music timbres the scheduler plays; the rest are the
/// building blocks of sound effects. For the noise-based timbres
/// (`PercussionHiHat`, `NoiseBurst`) the request frequency is the filter
/// cutoff or band centre rather than a pitch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timbre {
    Melody,
    Bass,
    Harmony,
    /// Kick-like accent on beat 0
    PercussionLow,
    /// Snare-like accent on beat 2
    PercussionMid,
    /// Off-beat hi-hat
    PercussionHiHat,
    /// Sine with an exponential pitch glide to `glide` times the start
    /// frequency over `glide_fraction` of the duration, decaying to `floor`
    Blip {
        glide: f32,
        glide_fraction: f32,
        floor: f32,
    },
    NoiseBurst,
    Chime,
}

impl Timbre {
    /// A blip that holds its pitch.
    pub const fn steady_blip() -> Self {
        Timbre::Blip {
            glide: 1.0,
            glide_fraction: 0.0,
            floor: crate::voices::BLIP_FLOOR,
        }
    }

    /// Peak level used when the caller does not supply one.
    pub fn default_level(self) -> f32 {
        match self {
            Timbre::Melody => crate::voices::MELODY_LEVEL,
            Timbre::Bass => crate::voices::BASS_LEVEL,
            Timbre::Harmony => crate::voices::HARMONY_LEVEL,
            Timbre::PercussionLow => crate::voices::KICK_LEVEL,
            Timbre::PercussionMid => crate::voices::SNARE_LEVEL,
            Timbre::PercussionHiHat => crate::voices::HIHAT_LEVEL,
            Timbre::Blip { .. } => 0.2,
            Timbre::NoiseBurst => 0.1,
            Timbre::Chime => 0.3,
        }
    }
}

/// Everything the audio facility needs to build and place one transient voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteRequest {
    pub timbre: Timbre,
    /// Pitch in Hz (filter frequency for noise timbres)
    pub frequency: f32,
    /// Absolute start on the audio clock, in seconds
    pub start: f64,
    /// Seconds from start to stop
    pub duration: f32,
    /// Peak level before the bus gain is applied
    pub level: f32,
    pub bus: Bus,
}

impl NoteRequest {
    /// Absolute stop time on the audio clock.
    pub fn end(&self) -> f64 {
        self.start + self.duration as f64
    }
}
