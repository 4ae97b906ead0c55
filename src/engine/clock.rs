use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Monotonic audio clock shared between the audio and control threads.
///
/// Counts frames rendered by the engine while running. Time only moves while
/// the facility is activated; before that the engine outputs silence and the
/// clock stands still.
#[derive(Debug)]
pub struct AudioClock {
    frames: AtomicU64,
    running: AtomicBool,
    sample_rate: f32,
}

impl AudioClock {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            frames: AtomicU64::new(0),
            running: AtomicBool::new(false),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Seconds of audio rendered so far.
    pub fn seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    pub(crate) fn advance(&self, frames: u64) {
        self.frames.fetch_add(frames, Ordering::AcqRel);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_follow_frames() {
        let clock = AudioClock::new(48_000.0);
        assert_eq!(clock.seconds(), 0.0);

        clock.advance(24_000);
        assert!((clock.seconds() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn starts_stopped() {
        let clock = AudioClock::new(44_100.0);
        assert!(!clock.is_running());
        clock.set_running(true);
        assert!(clock.is_running());
    }
}
