//! Audio-thread renderer, clock and buses.
//!
//! The [`Engine`] lives on the audio thread (a device callback, or a test
//! rendering offline). It owns every sounding voice, mixes them into a music
//! and an effects bus, applies the bus gains and advances the shared
//! [`AudioClock`]. The control thread talks to it through an
//! [`EngineHandle`], which implements [`AudioFacility`].

pub mod bus;
pub mod clock;
pub mod facility;

use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::RingBuffer;

pub use bus::{Bus, BusLevels};
pub use clock::AudioClock;
#[cfg(feature = "rtrb")]
pub use facility::EngineHandle;
pub use facility::{AudioFacility, FacilityError};

#[cfg(feature = "rtrb")]
use crate::synth::message::VoiceLink;
use crate::{
    synth::{
        message::{EngineMessage, MessageReceiver},
        ScheduledVoice,
    },
    MAX_BLOCK_SIZE,
};

/// Voices that may sound at once; later arrivals are dropped.
pub const MAX_VOICES: usize = 256;

/// Capacity of the control-to-audio queue.
pub const QUEUE_CAPACITY: usize = 512;

/// Create an engine and its control handle sharing one clock and one set of
/// bus levels.
///
/// Finished voices travel back to the handle, which frees them on the
/// control thread.
#[cfg(feature = "rtrb")]
pub fn channel(sample_rate: f32, levels: Arc<BusLevels>) -> (Engine<VoiceLink>, EngineHandle) {
    let (tx, rx) = RingBuffer::<EngineMessage>::new(QUEUE_CAPACITY);
    let (retired_tx, retired_rx) = RingBuffer::<ScheduledVoice>::new(MAX_VOICES);
    let clock = Arc::new(AudioClock::new(sample_rate));

    let link = VoiceLink::new(rx, retired_tx);
    let engine = Engine::new(link, Arc::clone(&clock), Arc::clone(&levels));
    let handle = EngineHandle::new(tx, retired_rx, clock, levels);
    (engine, handle)
}

pub struct Engine<R> {
    rx: R,
    clock: Arc<AudioClock>,
    levels: Arc<BusLevels>,
    voices: Vec<ScheduledVoice>,
    music: Vec<f32>,
    effects: Vec<f32>,
    scratch: Vec<f32>,
    dropped: u64,
}

impl<R: MessageReceiver> Engine<R> {
    pub fn new(rx: R, clock: Arc<AudioClock>, levels: Arc<BusLevels>) -> Self {
        Self {
            rx,
            clock,
            levels,
            voices: Vec::with_capacity(MAX_VOICES),
            music: vec![0.0; MAX_BLOCK_SIZE],
            effects: vec![0.0; MAX_BLOCK_SIZE],
            scratch: vec![0.0; MAX_BLOCK_SIZE],
            dropped: 0,
        }
    }

    pub fn clock(&self) -> &Arc<AudioClock> {
        &self.clock
    }

    pub fn sample_rate(&self) -> f32 {
        self.clock.sample_rate()
    }

    /// Voices currently queued or sounding.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Voices refused because `MAX_VOICES` were already sounding.
    pub fn dropped_voices(&self) -> u64 {
        self.dropped
    }

    /// Render mono output of any length.
    pub fn render(&mut self, out: &mut [f32]) {
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_block(chunk);
        }
    }

    /// Render interleaved output, copying the mono mix to every channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let mut mono = [0.0f32; 256];

        for frame_chunk in data.chunks_mut(mono.len() * channels) {
            let frames = frame_chunk.len() / channels;
            let block = &mut mono[..frames];
            self.render_block(block);

            for (frame, &sample) in frame_chunk.chunks_mut(channels).zip(block.iter()) {
                frame.fill(sample);
            }
        }
    }

    fn drain_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                EngineMessage::Schedule(voice) => {
                    if self.voices.len() < MAX_VOICES {
                        self.voices.push(voice);
                    } else {
                        self.dropped += 1;
                    }
                }
            }
        }
    }

    fn retire_finished(&mut self) {
        let mut i = 0;
        while i < self.voices.len() {
            if self.voices[i].is_finished() {
                let voice = self.voices.swap_remove(i);
                self.rx.retire(voice);
            } else {
                i += 1;
            }
        }
    }

    fn render_block(&mut self, out: &mut [f32]) {
        self.drain_messages();

        // Not activated: silence, and the clock stands still
        if !self.clock.is_running() {
            out.fill(0.0);
            return;
        }

        let frames = out.len();
        let block_start = self.clock.frames();
        let sample_rate = self.clock.sample_rate();

        let music = &mut self.music[..frames];
        let effects = &mut self.effects[..frames];
        music.fill(0.0);
        effects.fill(0.0);

        for voice in self.voices.iter_mut() {
            let scratch = &mut self.scratch[..frames];
            scratch.fill(0.0);
            if !voice.render(scratch, block_start, sample_rate) {
                continue;
            }

            let bus = match voice.bus() {
                Bus::Music => &mut *music,
                Bus::Effects => &mut *effects,
            };
            for (b, s) in bus.iter_mut().zip(scratch.iter()) {
                *b += *s;
            }
        }

        let music_gain = self.levels.gain(Bus::Music);
        let effects_gain = self.levels.gain(Bus::Effects);
        for ((o, m), e) in out.iter_mut().zip(music.iter()).zip(effects.iter()) {
            *o = m * music_gain + e * effects_gain;
        }

        self.retire_finished();

        self.clock.advance(frames as u64);
    }
}
