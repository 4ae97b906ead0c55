use tracing::{debug, info, warn};

use crate::{
    engine::{AudioFacility, Bus, FacilityError},
    synth::request::{NoteRequest, Timbre},
};

/// Turns note and effect calls into transient voices on an audio facility.
///
/// Holds no musical state. When the facility is missing or not yet activated
/// every render is a silent no-op, so callers never have to check first;
/// the first failure after a success is logged once at `warn`.
pub struct VoiceSynthesizer<F> {
    facility: Option<F>,
    warned: bool,
}

impl<F: AudioFacility> VoiceSynthesizer<F> {
    pub fn new(facility: F) -> Self {
        Self {
            facility: Some(facility),
            warned: false,
        }
    }

    /// A synthesizer with no output device. Everything it renders is silent.
    pub fn unavailable() -> Self {
        Self {
            facility: None,
            warned: false,
        }
    }

    pub fn facility(&self) -> Option<&F> {
        self.facility.as_ref()
    }

    /// Current audio-clock time in seconds, or 0 when there is no facility.
    pub fn now(&self) -> f64 {
        self.facility.as_ref().map_or(0.0, |f| f.now())
    }

    /// True when renders will actually be heard.
    pub fn is_available(&self) -> bool {
        self.facility.as_ref().is_some_and(|f| f.is_running())
    }

    /// Start the facility's clock. Safe to call repeatedly.
    pub fn activate(&mut self) {
        let Some(facility) = self.facility.as_mut() else {
            if !self.warned {
                warn!("no audio device; sound stays off");
                self.warned = true;
            }
            return;
        };

        if facility.is_running() {
            return;
        }

        match facility.resume() {
            Ok(()) => {
                info!("audio facility activated");
                self.warned = false;
            }
            Err(err) => warn!(%err, "could not activate audio facility"),
        }
    }

    /// Render a music note at the timbre's own level on the music bus.
    pub fn render_note(&mut self, timbre: Timbre, frequency: f32, start: f64, duration: f32) {
        self.submit(NoteRequest {
            timbre,
            frequency,
            start,
            duration,
            level: timbre.default_level(),
            bus: Bus::Music,
        });
    }

    /// Render a one-shot effect at `level` on the effects bus.
    pub fn render_effect(
        &mut self,
        timbre: Timbre,
        frequency: f32,
        start: f64,
        duration: f32,
        level: f32,
    ) {
        self.submit(NoteRequest {
            timbre,
            frequency,
            start,
            duration,
            level,
            bus: Bus::Effects,
        });
    }

    fn submit(&mut self, request: NoteRequest) {
        let Some(facility) = self.facility.as_mut() else {
            return;
        };

        match facility.submit(request) {
            Ok(()) => self.warned = false,
            Err(FacilityError::QueueFull) => {
                debug!(timbre = ?request.timbre, "voice queue full; note dropped");
            }
            Err(err) => {
                if !self.warned {
                    warn!(%err, "audio output unavailable; rendering silently");
                    self.warned = true;
                }
            }
        }
    }
}
