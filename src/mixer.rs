use std::sync::Arc;

use crate::{
    engine::{Bus, BusLevels},
    preferences::{clamp_volume, Preferences},
};

/// Volume and enable state for the music and effects buses.
///
/// Every change is written straight through to the shared [`BusLevels`],
/// so the audio thread picks it up on its next block. The effective gain of
/// a disabled bus is 0 regardless of its volume.
#[derive(Debug)]
pub struct MixerSettings {
    music_volume: f32,
    sfx_volume: f32,
    music_enabled: bool,
    sfx_enabled: bool,
    levels: Arc<BusLevels>,
}

impl MixerSettings {
    pub fn new(prefs: Preferences, levels: Arc<BusLevels>) -> Self {
        let prefs = prefs.sanitized();
        let mixer = Self {
            music_volume: prefs.music_volume,
            sfx_volume: prefs.sfx_volume,
            music_enabled: prefs.music_enabled,
            sfx_enabled: prefs.sfx_enabled,
            levels,
        };
        mixer.publish();
        mixer
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = clamp_volume(volume);
        self.publish();
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = clamp_volume(volume);
        self.publish();
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        self.publish();
    }

    pub fn set_sfx_enabled(&mut self, enabled: bool) {
        self.sfx_enabled = enabled;
        self.publish();
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn sfx_enabled(&self) -> bool {
        self.sfx_enabled
    }

    /// Gain actually applied to `bus`.
    pub fn effective_gain(&self, bus: Bus) -> f32 {
        match bus {
            Bus::Music if self.music_enabled => self.music_volume,
            Bus::Effects if self.sfx_enabled => self.sfx_volume,
            _ => 0.0,
        }
    }

    pub fn levels(&self) -> &Arc<BusLevels> {
        &self.levels
    }

    /// Snapshot for the host to persist.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            music_volume: self.music_volume,
            sfx_volume: self.sfx_volume,
            music_enabled: self.music_enabled,
            sfx_enabled: self.sfx_enabled,
        }
    }

    fn publish(&self) {
        for bus in [Bus::Music, Bus::Effects] {
            self.levels.set_gain(bus, self.effective_gain(bus));
        }
    }
}
