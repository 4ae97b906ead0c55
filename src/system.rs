//! The sound system a game session holds and passes to its callbacks.
//!
//! [`SoundSystem`] bundles the synthesizer, the music scheduler, the effect
//! player and the mixer behind the calls gameplay and settings code make.
//! None of them return errors: audio is an enhancement, and the worst
//! outcome of any call is silence.
//!
//! # Example
//!
//! ```ignore
//! use std::{sync::Arc, time::Instant};
//! use devilbox_audio::{engine, engine::BusLevels, Preferences, SoundSystem};
//!
//! let (engine, handle) = engine::channel(48_000.0, Arc::new(BusLevels::default()));
//! // move `engine` into the device callback ...
//!
//! let mut sound = SoundSystem::with_engine(handle, Preferences::default());
//! sound.activate_audio_facility(); // from a key press or click
//! sound.start_music(1, Instant::now());
//!
//! loop {
//!     sound.update(Instant::now());
//!     // physics step ...
//!     sound.on_particle_collision(1.5, Instant::now());
//! }
//! ```
//!
//! The system takes `&mut self` everywhere. A host that delivers events from
//! several threads wraps it in a `Mutex`, which also makes the collision
//! cooldown's check-and-set atomic.

use std::{sync::Arc, time::Instant};

use tracing::debug;

use crate::{
    composition::{Composition, LevelMusicProfile},
    engine::{AudioFacility, BusLevels},
    mixer::MixerSettings,
    preferences::Preferences,
    scheduler::PlaybackScheduler,
    sfx::{CollisionSoundRequest, SfxPlayer},
    synth::VoiceSynthesizer,
};

pub struct SoundSystem<F> {
    synth: VoiceSynthesizer<F>,
    scheduler: PlaybackScheduler,
    sfx: SfxPlayer,
    mixer: MixerSettings,
}

impl<F: AudioFacility> SoundSystem<F> {
    /// A system rendering through `facility`, with bus gains published to
    /// `levels` (the same levels the facility's renderer reads).
    pub fn new(facility: F, prefs: Preferences, levels: Arc<BusLevels>) -> Self {
        Self::assemble(VoiceSynthesizer::new(facility), prefs, levels)
    }

    /// A system with no output device. Every call still updates state.
    pub fn silent(prefs: Preferences) -> Self {
        Self::assemble(
            VoiceSynthesizer::unavailable(),
            prefs,
            Arc::new(BusLevels::default()),
        )
    }

    fn assemble(synth: VoiceSynthesizer<F>, prefs: Preferences, levels: Arc<BusLevels>) -> Self {
        Self {
            synth,
            scheduler: PlaybackScheduler::new(),
            sfx: SfxPlayer::new(),
            mixer: MixerSettings::new(prefs, levels),
        }
    }

    // Session lifecycle

    /// Start the level's music. Ignored while music is disabled or already
    /// playing.
    pub fn start_music(&mut self, level: u32, now: Instant) {
        if !self.mixer.music_enabled() {
            debug!(level, "music disabled; not starting");
            return;
        }
        self.scheduler.start(level, now, &mut self.synth);
    }

    pub fn stop_music(&mut self) {
        self.scheduler.stop();
    }

    /// Drive the music. Call once per host frame.
    pub fn update(&mut self, now: Instant) {
        self.scheduler.update(now, &mut self.synth);
    }

    // Gameplay events

    pub fn on_particle_collision(&mut self, energy_exchanged: f32, now: Instant) {
        self.play_impact(CollisionSoundRequest::particle(energy_exchanged), now);
    }

    pub fn on_wall_bounce(&mut self, impact_speed: f32, now: Instant) {
        self.play_impact(CollisionSoundRequest::wall(impact_speed), now);
    }

    /// Play a prebuilt impact request, subject to the shared cooldown.
    pub fn play_impact(&mut self, request: CollisionSoundRequest, now: Instant) {
        if self.mixer.sfx_enabled() {
            self.sfx.play_impact(request, now, &mut self.synth);
        }
    }

    pub fn on_door_open(&mut self) {
        if self.mixer.sfx_enabled() {
            self.sfx.door_open(&mut self.synth);
        }
    }

    pub fn on_door_close(&mut self) {
        if self.mixer.sfx_enabled() {
            self.sfx.door_close(&mut self.synth);
        }
    }

    /// Stop the music, then play the fanfare.
    pub fn on_level_complete(&mut self) {
        self.stop_music();
        if self.mixer.sfx_enabled() {
            self.sfx.fanfare(&mut self.synth);
        }
    }

    /// A click is a user gesture, so it also activates output.
    pub fn on_ui_click(&mut self) {
        self.activate_audio_facility();
        if self.mixer.sfx_enabled() {
            self.sfx.click(&mut self.synth);
        }
    }

    // Settings

    pub fn set_music_volume(&mut self, volume: f32) {
        self.mixer.set_music_volume(volume);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.mixer.set_sfx_volume(volume);
    }

    /// Disabling music also stops it.
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.mixer.set_music_enabled(enabled);
        if !enabled {
            self.stop_music();
        }
    }

    pub fn set_sfx_enabled(&mut self, enabled: bool) {
        self.mixer.set_sfx_enabled(enabled);
    }

    /// Activate the output device. Call from a user-initiated action; safe
    /// to call repeatedly.
    pub fn activate_audio_facility(&mut self) {
        self.synth.activate();
    }

    // Accessors

    pub fn is_music_playing(&self) -> bool {
        self.scheduler.is_playing()
    }

    pub fn music_profile(&self) -> Option<LevelMusicProfile> {
        self.scheduler.profile()
    }

    pub fn composition(&self) -> Option<&'static Composition> {
        self.scheduler.profile().map(|p| p.composition())
    }

    /// Structure index of the bar that plays next.
    pub fn current_bar(&self) -> Option<usize> {
        self.scheduler.current_bar()
    }

    pub fn is_audible(&self) -> bool {
        self.synth.is_available()
    }

    pub fn mixer(&self) -> &MixerSettings {
        &self.mixer
    }

    pub fn preferences(&self) -> Preferences {
        self.mixer.preferences()
    }

    pub fn synthesizer(&self) -> &VoiceSynthesizer<F> {
        &self.synth
    }
}

#[cfg(feature = "rtrb")]
impl SoundSystem<crate::engine::EngineHandle> {
    /// A system driving an in-process [`Engine`](crate::engine::Engine).
    pub fn with_engine(handle: crate::engine::EngineHandle, prefs: Preferences) -> Self {
        let levels = Arc::clone(handle.levels());
        Self::new(handle, prefs, levels)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        engine::Bus,
        synth::{synthesizer::testing::RecordingFacility, Timbre},
    };

    fn system() -> (RecordingFacility, SoundSystem<RecordingFacility>) {
        let facility = RecordingFacility::default();
        let mut sound = SoundSystem::new(
            facility.clone(),
            Preferences::default(),
            Arc::new(BusLevels::default()),
        );
        sound.activate_audio_facility();
        (facility, sound)
    }

    fn effects(facility: &RecordingFacility) -> usize {
        facility
            .requests()
            .iter()
            .filter(|r| r.bus == Bus::Effects)
            .count()
    }

    #[test]
    fn music_plays_and_stops() {
        let (facility, mut sound) = system();
        let t0 = Instant::now();
        sound.start_music(2, t0);
        assert!(sound.is_music_playing());
        assert_eq!(sound.composition().unwrap().name, "Turkish March");
        assert!(facility.count(Timbre::PercussionLow) == 1);

        sound.stop_music();
        sound.update(t0 + Duration::from_secs(5));
        assert_eq!(facility.count(Timbre::PercussionLow), 1);
    }

    #[test]
    fn disabled_music_does_not_start() {
        let (facility, mut sound) = system();
        sound.set_music_enabled(false);
        sound.start_music(1, Instant::now());
        assert!(!sound.is_music_playing());
        assert!(facility.requests().is_empty());
    }

    #[test]
    fn disabling_music_stops_it() {
        let (_facility, mut sound) = system();
        sound.start_music(1, Instant::now());
        sound.set_music_enabled(false);
        assert!(!sound.is_music_playing());
        assert_eq!(sound.mixer().effective_gain(Bus::Music), 0.0);
    }

    #[test]
    fn disabled_effects_render_nothing() {
        let (facility, mut sound) = system();
        sound.set_sfx_enabled(false);
        let now = Instant::now();

        sound.on_particle_collision(1.5, now);
        sound.on_wall_bounce(200.0, now);
        sound.on_door_open();
        sound.on_door_close();
        sound.on_ui_click();
        assert_eq!(effects(&facility), 0);

        // the cooldown was not consumed while disabled
        sound.set_sfx_enabled(true);
        sound.on_particle_collision(1.5, now + Duration::from_millis(1));
        assert_eq!(effects(&facility), 2);
    }

    #[test]
    fn level_complete_stops_music_even_when_effects_are_off() {
        let (facility, mut sound) = system();
        sound.start_music(1, Instant::now());
        sound.set_sfx_enabled(false);

        sound.on_level_complete();
        assert!(!sound.is_music_playing());
        assert_eq!(facility.count(Timbre::Chime), 0);
    }

    #[test]
    fn level_complete_plays_the_fanfare() {
        let (facility, mut sound) = system();
        sound.on_level_complete();
        assert_eq!(facility.count(Timbre::Chime), 4);
    }

    #[test]
    fn click_activates_output() {
        let facility = RecordingFacility::default();
        let mut sound = SoundSystem::new(
            facility.clone(),
            Preferences::default(),
            Arc::new(BusLevels::default()),
        );
        assert!(!sound.is_audible());

        sound.on_ui_click();
        assert!(sound.is_audible());
        assert_eq!(facility.count(Timbre::steady_blip()), 1);
    }

    #[test]
    fn events_before_activation_are_silent() {
        let facility = RecordingFacility::default();
        let mut sound = SoundSystem::new(
            facility.clone(),
            Preferences::default(),
            Arc::new(BusLevels::default()),
        );
        sound.on_door_open();
        sound.start_music(1, Instant::now());
        assert!(facility.requests().is_empty());
        assert!(sound.is_music_playing());
    }

    #[test]
    fn collisions_are_throttled() {
        let (facility, mut sound) = system();
        let t0 = Instant::now();
        sound.on_particle_collision(0.4, t0);
        sound.on_particle_collision(0.4, t0 + Duration::from_millis(20));
        assert_eq!(effects(&facility), 1);

        sound.on_wall_bounce(50.0, t0 + Duration::from_millis(60));
        assert_eq!(effects(&facility), 3);
    }

    #[test]
    fn settings_round_trip_through_preferences() {
        let levels = Arc::new(BusLevels::default());
        let mut sound =
            SoundSystem::new(RecordingFacility::default(), Preferences::default(), levels.clone());
        sound.set_music_volume(0.3);
        sound.set_sfx_enabled(false);

        let prefs = sound.preferences();
        assert_eq!(prefs.music_volume, 0.3);
        assert!(!prefs.sfx_enabled);
        assert_eq!(levels.gain(Bus::Music), 0.3);
        assert_eq!(levels.gain(Bus::Effects), 0.0);
    }

    #[test]
    fn silent_system_keeps_state() {
        let mut sound = SoundSystem::<RecordingFacility>::silent(Preferences::default());
        let t0 = Instant::now();
        sound.activate_audio_facility();
        sound.start_music(3, t0);
        sound.update(t0 + Duration::from_secs(2));
        assert_eq!(sound.current_bar(), Some(2));
        assert!(!sound.is_audible());
    }
}
