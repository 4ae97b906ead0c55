use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two independent output groups every voice is routed through.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bus {
    Music,
    Effects,
}

/// Effective gain per bus, shared with the audio thread.
///
/// Stored as f32 bit patterns in atomics so the audio thread reads the
/// current value at render time without locking. A disabled bus has gain 0.
#[derive(Debug)]
pub struct BusLevels {
    music: AtomicU32,
    effects: AtomicU32,
}

impl BusLevels {
    pub fn new(music: f32, effects: f32) -> Self {
        Self {
            music: AtomicU32::new(music.to_bits()),
            effects: AtomicU32::new(effects.to_bits()),
        }
    }

    fn slot(&self, bus: Bus) -> &AtomicU32 {
        match bus {
            Bus::Music => &self.music,
            Bus::Effects => &self.effects,
        }
    }

    pub fn gain(&self, bus: Bus) -> f32 {
        f32::from_bits(self.slot(bus).load(Ordering::Relaxed))
    }

    pub fn set_gain(&self, bus: Bus, gain: f32) {
        self.slot(bus).store(gain.to_bits(), Ordering::Relaxed);
    }
}

impl Default for BusLevels {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
