use std::time::Duration;

use super::{Composition, CATALOG};

/// Tempo of level 1.
pub const BASE_BPM: f64 = 120.0;
/// Tempo added per level.
pub const TEMPO_STEP_BPM: f64 = 4.0;
pub const BEATS_PER_BAR: f64 = 4.0;

/// Index into the catalog for `level`, cycling through the pieces.
pub fn composition_index(level: u32) -> usize {
    (level.max(1) as usize - 1) % CATALOG.len()
}

/// Everything derived from a level number: which piece and how fast.
///
/// Recomputed on every start; never stored across sessions.
#[derive(Debug, Clone, Copy)]
pub struct LevelMusicProfile {
    pub level: u32,
    pub composition_index: usize,
    pub tempo_bpm: f64,
    /// Seconds per beat
    pub beat: f64,
    /// Seconds per bar
    pub bar: f64,
}

impl LevelMusicProfile {
    /// Profile for `level`. Levels below 1 are treated as 1.
    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        let tempo_bpm = BASE_BPM + TEMPO_STEP_BPM * (level - 1) as f64;
        let beat = 60.0 / tempo_bpm;

        Self {
            level,
            composition_index: composition_index(level),
            tempo_bpm,
            beat,
            bar: BEATS_PER_BAR * beat,
        }
    }

    pub fn composition(&self) -> &'static Composition {
        CATALOG[self.composition_index]
    }

    /// Bar length on the control clock.
    pub fn bar_duration(&self) -> Duration {
        Duration::from_secs_f64(self.bar)
    }
}
