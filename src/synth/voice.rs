use crate::{
    engine::Bus,
    graph::node::{GraphNode, RenderCtx},
    synth::request::NoteRequest,
    voices,
};

/// A transient voice bound to an absolute start time on the audio clock.
///
/// Built once per note on the control side, sent to the audio thread, played
/// through its envelopes and then discarded. Voices are never reused.
pub struct ScheduledVoice {
    node: Box<dyn GraphNode>,
    frequency: f32,
    start: f64,
    bus: Bus,
    started: bool,
}

impl ScheduledVoice {
    pub fn new(request: &NoteRequest) -> Self {
        Self {
            node: voices::build(request),
            frequency: request.frequency,
            start: request.start,
            bus: request.bus,
            started: false,
        }
    }

    pub fn bus(&self) -> Bus {
        self.bus
    }

    /// First frame of the voice at `sample_rate`.
    pub fn start_frame(&self, sample_rate: f32) -> u64 {
        (self.start * sample_rate as f64).round().max(0.0) as u64
    }

    /// Render this voice's share of the block starting at `block_start` into
    /// `out`, leaving samples before the voice's start untouched.
    ///
    /// A voice whose start time has already passed begins at the block start.
    pub fn render(&mut self, out: &mut [f32], block_start: u64, sample_rate: f32) -> bool {
        let start_frame = self.start_frame(sample_rate);
        if start_frame >= block_start + out.len() as u64 {
            return false;
        }

        let offset = start_frame.saturating_sub(block_start) as usize;
        let ctx = RenderCtx::from_freq(sample_rate, self.frequency);
        if !self.started {
            self.node.note_on(&ctx);
            self.started = true;
        }

        self.node.render_block(&mut out[offset..], &ctx);
        true
    }

    /// True once the voice has started and all its envelopes have run out.
    pub fn is_finished(&self) -> bool {
        self.started && !self.node.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::request::Timbre;

    fn request(start: f64) -> NoteRequest {
        NoteRequest {
            timbre: Timbre::Harmony,
            frequency: 440.0,
            start,
            duration: 0.01,
            level: 0.04,
            bus: Bus::Music,
        }
    }

    #[test]
    fn waits_for_its_start_frame() {
        let mut voice = ScheduledVoice::new(&request(0.01));
        let mut block = vec![0.0; 256];

        // 0.01 s at 48 kHz is frame 480: not in the first block
        assert!(!voice.render(&mut block, 0, 48_000.0));
        assert!(block.iter().all(|&s| s == 0.0));
        assert!(!voice.is_finished());

        // Second block covers frames 256..512; voice starts at offset 224
        assert!(voice.render(&mut block, 256, 48_000.0));
        assert!(block[..224].iter().all(|&s| s == 0.0));
        assert!(block[225..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn late_voice_starts_at_block_start() {
        let mut voice = ScheduledVoice::new(&request(0.0));
        let mut block = vec![0.0; 128];
        assert!(voice.render(&mut block, 10_000, 48_000.0));
        assert!(block[1..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn finishes_after_its_duration() {
        let mut voice = ScheduledVoice::new(&request(0.0));
        let mut block = vec![0.0; 1024];
        voice.render(&mut block, 0, 48_000.0);
        assert!(voice.is_finished(), "0.01 s voice is done within 1024 frames");
    }
}
