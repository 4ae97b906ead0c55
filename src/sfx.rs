//! One-shot sound effects for gameplay events.
//!
//! Each event maps its physical input (if any) to a handful of blip, noise
//! or chime renders on the effects bus. Collision and wall-bounce events
//! share one cooldown so a burst of simultaneous impacts sounds once.
//!
//! ```text
//!   energy ──→ min(E / 2, 1) ──→ n ──┬──→ pitch   600 + 1200·n
//!                                    ├──→ level   0.08 + 0.2·n
//!                                    └──→ length  0.04 + 0.06·n
//! ```

use std::time::{Duration, Instant};

use tracing::trace;

use crate::{
    engine::AudioFacility,
    synth::{Timbre, VoiceSynthesizer},
    voices::BLIP_FLOOR,
};

/// Door blips fade out higher than impact blips.
const DOOR_FLOOR: f32 = 0.01;

/// Minimum spacing between accepted collision or bounce sounds.
pub const COOLDOWN: Duration = Duration::from_millis(50);

/// Speed at which a wall bounce reaches its loudest.
pub const WALL_REFERENCE_SPEED: f32 = 300.0;

/// C5 E5 G5 C6
pub const FANFARE: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
const FANFARE_SPACING: f64 = 0.1;
const FANFARE_NOTE: f32 = 0.5;
const FANFARE_LEVEL: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    ParticleCollision,
    WallBounce,
}

/// A physical impact to sonify. Built and consumed within one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSoundRequest {
    pub kind: CollisionKind,
    /// Exchanged energy for particle collisions, impact speed for walls
    pub magnitude: f32,
}

impl CollisionSoundRequest {
    pub fn particle(energy: f32) -> Self {
        Self {
            kind: CollisionKind::ParticleCollision,
            magnitude: energy,
        }
    }

    pub fn wall(speed: f32) -> Self {
        Self {
            kind: CollisionKind::WallBounce,
            magnitude: speed,
        }
    }

    /// Energy exchanged between two particles, as the squared relative
    /// speed over the squared reference speed.
    pub fn from_particle_velocities(v1: [f32; 2], v2: [f32; 2], reference_speed: f32) -> Self {
        let dx = v1[0] - v2[0];
        let dy = v1[1] - v2[1];
        let reference = reference_speed.max(f32::EPSILON);
        Self::particle((dx * dx + dy * dy) / (reference * reference))
    }

    pub fn from_wall_velocity(velocity: [f32; 2]) -> Self {
        Self::wall(velocity[0].hypot(velocity[1]))
    }

    /// The renders this impact produces.
    pub fn tones(&self) -> Vec<Tone> {
        match self.kind {
            CollisionKind::ParticleCollision => collision_tones(self.magnitude),
            CollisionKind::WallBounce => wall_tones(self.magnitude),
        }
    }
}

/// One effect render, relative to the moment the event fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub timbre: Timbre,
    pub frequency: f32,
    /// Seconds after the event
    pub delay: f64,
    pub duration: f32,
    pub level: f32,
}

impl Tone {
    fn blip(frequency: f32, duration: f32, level: f32, glide: f32, glide_fraction: f32) -> Self {
        Self {
            timbre: Timbre::Blip {
                glide,
                glide_fraction,
                floor: BLIP_FLOOR,
            },
            frequency,
            delay: 0.0,
            duration,
            level,
        }
    }

    fn fading_to(mut self, level: f32) -> Self {
        if let Timbre::Blip { floor, .. } = &mut self.timbre {
            *floor = level;
        }
        self
    }
}

fn normalize(value: f32, full_scale: f32) -> f32 {
    (value.max(0.0) / full_scale).min(1.0)
}

/// A ping whose pitch, loudness and length grow with the energy exchanged.
/// Hard hits add an overtone that glides down onto the main pitch.
pub fn collision_tones(energy: f32) -> Vec<Tone> {
    let n = normalize(energy, 2.0);
    let frequency = 600.0 + n * 1200.0;
    let level = 0.08 + n * 0.2;
    let duration = 0.04 + n * 0.06;

    let mut tones = vec![Tone::blip(frequency, duration, level, 0.7, 1.0)];
    if n > 0.5 {
        tones.push(Tone::blip(
            frequency * 1.5,
            duration * 0.5,
            level * 0.3,
            1.0 / 1.5,
            1.0,
        ));
    }
    tones
}

/// A low knock with a sub-tone an octave below.
pub fn wall_tones(speed: f32) -> Vec<Tone> {
    let n = normalize(speed, WALL_REFERENCE_SPEED);
    let level = 0.12 + n * 0.15;
    let base = 80.0 + n * 40.0;

    vec![
        Tone::blip(base * 2.0, 0.08, level, 0.5, 1.0),
        Tone::blip(base, 0.05, level * 0.6, 0.5, 1.0),
    ]
}

/// Rising blip over a short hiss.
pub fn door_open_tones() -> Vec<Tone> {
    vec![
        Tone::blip(200.0, 0.2, 0.3, 2.0, 0.75).fading_to(DOOR_FLOOR),
        Tone {
            timbre: Timbre::NoiseBurst,
            frequency: 3_000.0,
            delay: 0.0,
            duration: 0.15,
            level: 0.1,
        },
    ]
}

/// Falling blip plus a low thud.
pub fn door_close_tones() -> Vec<Tone> {
    vec![
        Tone::blip(300.0, 0.15, 0.4, 80.0 / 300.0, 0.1 / 0.15).fading_to(DOOR_FLOOR),
        Tone::blip(60.0, 0.1, 0.5, 0.5, 1.0).fading_to(DOOR_FLOOR),
    ]
}

/// Ascending arpeggio.
pub fn fanfare_tones() -> Vec<Tone> {
    FANFARE
        .iter()
        .enumerate()
        .map(|(i, &frequency)| Tone {
            timbre: Timbre::Chime,
            frequency,
            delay: i as f64 * FANFARE_SPACING,
            duration: FANFARE_NOTE,
            level: FANFARE_LEVEL,
        })
        .collect()
}

pub fn click_tones() -> Vec<Tone> {
    vec![Tone::blip(800.0, 0.05, 0.2, 1.0, 0.0)]
}

/// Plays effect tones and owns the impact cooldown.
///
/// Whether effects are enabled is the caller's concern; this type only
/// renders and throttles.
#[derive(Debug, Default)]
pub struct SfxPlayer {
    last_accepted: Option<Instant>,
}

impl SfxPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-and-set the shared cooldown. True if an impact at `now` may sound.
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < COOLDOWN {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Play an impact unless it falls inside the cooldown. Returns whether
    /// it was accepted.
    pub fn play_impact<F: AudioFacility>(
        &mut self,
        request: CollisionSoundRequest,
        now: Instant,
        synth: &mut VoiceSynthesizer<F>,
    ) -> bool {
        if !self.try_accept(now) {
            trace!(kind = ?request.kind, "impact throttled");
            return false;
        }
        play(&request.tones(), synth);
        true
    }

    pub fn door_open<F: AudioFacility>(&mut self, synth: &mut VoiceSynthesizer<F>) {
        play(&door_open_tones(), synth);
    }

    pub fn door_close<F: AudioFacility>(&mut self, synth: &mut VoiceSynthesizer<F>) {
        play(&door_close_tones(), synth);
    }

    pub fn fanfare<F: AudioFacility>(&mut self, synth: &mut VoiceSynthesizer<F>) {
        play(&fanfare_tones(), synth);
    }

    pub fn click<F: AudioFacility>(&mut self, synth: &mut VoiceSynthesizer<F>) {
        play(&click_tones(), synth);
    }
}

/// Render `tones` starting at the audio clock's current time.
fn play<F: AudioFacility>(tones: &[Tone], synth: &mut VoiceSynthesizer<F>) {
    let now = synth.now();
    for tone in tones {
        synth.render_effect(
            tone.timbre,
            tone.frequency,
            now + tone.delay,
            tone.duration,
            tone.level,
        );
    }
}
