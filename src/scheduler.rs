//! PlaybackScheduler - bar-by-bar composition playback
//!
//! The scheduler owns no thread and no timer. The host calls
//! [`PlaybackScheduler::update`] from its frame loop; when the armed bar
//! deadline has passed, the next bar's notes are submitted to the
//! synthesizer at absolute audio-clock times.
//!
//! Two clocks are involved:
//!
//! ```text
//!   control clock (Instant)   ──→ decides WHEN a bar is dispatched
//!   audio clock (synth.now()) ──→ decides WHERE its notes land
//! ```
//!
//! Every bar re-reads the audio clock for its start time, so a coarse or
//! jittery host loop never accumulates drift against the rendered audio.

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    composition::{LevelMusicProfile, Section},
    engine::AudioFacility,
    synth::{Timbre, VoiceSynthesizer},
    voices::{
        HIHAT_CUTOFF, HIHAT_DURATION, KICK_DURATION, KICK_FREQUENCY, SNARE_DURATION,
        SNARE_FREQUENCY,
    },
};

/// Note lengths as a fraction of one beat.
pub const MELODY_NOTE_BEATS: f64 = 0.22;
pub const BASS_NOTE_BEATS: f64 = 0.45;
pub const HARMONY_NOTE_BEATS: f64 = 0.40;

/// Bookkeeping for a running piece
#[derive(Debug, Clone, Copy)]
struct PlaybackState {
    /// Level this session was started with
    profile: LevelMusicProfile,
    /// Index into the structure of the bar that plays next
    bar: usize,
    /// When the next bar is due on the control clock
    deadline: Instant,
}

/// Plays the level's composition one bar at a time.
///
/// `Stopped` when there is no armed continuation, `Playing` otherwise.
/// Pausing is `stop` followed by a later `start`.
#[derive(Debug, Default)]
pub struct PlaybackScheduler {
    state: Option<PlaybackState>,
}

impl PlaybackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing the piece for `level`, rendering bar 0 immediately.
    ///
    /// Returns false (and changes nothing) if already playing.
    pub fn start<F: AudioFacility>(
        &mut self,
        level: u32,
        now: Instant,
        synth: &mut VoiceSynthesizer<F>,
    ) -> bool {
        if self.state.is_some() {
            return false;
        }

        let profile = LevelMusicProfile::for_level(level);
        let composition = profile.composition();
        info!(
            level = profile.level,
            composition = composition.name,
            bpm = profile.tempo_bpm,
            "music started"
        );

        let mut state = PlaybackState {
            profile,
            bar: 0,
            deadline: now,
        };
        Self::advance(&mut state, now, synth);
        self.state = Some(state);
        true
    }

    /// Cancel the armed bar. Notes already submitted finish sounding.
    pub fn stop(&mut self) {
        if let Some(state) = self.state.take() {
            debug!(level = state.profile.level, bar = state.bar, "music stopped");
        }
    }

    /// Dispatch the next bar if its deadline has passed.
    ///
    /// At most one bar fires per call. A host that stalls for more than a
    /// bar skips the missed bars rather than bursting them.
    pub fn update<F: AudioFacility>(&mut self, now: Instant, synth: &mut VoiceSynthesizer<F>) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if now < state.deadline {
            return;
        }
        Self::advance(state, now, synth);
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_some()
    }

    /// Structure index of the bar that plays next, if playing.
    pub fn current_bar(&self) -> Option<usize> {
        self.state.map(|s| s.bar)
    }

    pub fn profile(&self) -> Option<LevelMusicProfile> {
        self.state.map(|s| s.profile)
    }

    /// When the armed bar fires, if playing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.map(|s| s.deadline)
    }

    /// Render the current bar, move to the next one and re-arm.
    fn advance<F: AudioFacility>(
        state: &mut PlaybackState,
        now: Instant,
        synth: &mut VoiceSynthesizer<F>,
    ) {
        let composition = state.profile.composition();
        let bar_start = synth.now();

        match composition.section_at(state.bar) {
            Some(section) => render_bar(section, &state.profile, bar_start, synth),
            None => debug!(bar = state.bar, "bar has no section; skipped"),
        }
        render_percussion(&state.profile, bar_start, synth);

        state.bar = (state.bar + 1) % composition.bar_count().max(1);

        let bar = state.profile.bar_duration();
        state.deadline += bar;
        if state.deadline <= now {
            state.deadline = now + bar;
        }
    }
}

/// Submit every non-rest slot of `section`, starting at `bar_start` on the
/// audio clock.
pub fn render_bar<F: AudioFacility>(
    section: &Section,
    profile: &LevelMusicProfile,
    bar_start: f64,
    synth: &mut VoiceSynthesizer<F>,
) {
    let beat = profile.beat;

    render_line(
        synth,
        Timbre::Melody,
        &section.melody,
        bar_start,
        beat / 4.0,
        MELODY_NOTE_BEATS * beat,
    );
    render_line(
        synth,
        Timbre::Bass,
        &section.bass,
        bar_start,
        beat / 2.0,
        BASS_NOTE_BEATS * beat,
    );
    if let Some(harmony) = &section.harmony {
        render_line(
            synth,
            Timbre::Harmony,
            harmony,
            bar_start,
            beat / 2.0,
            HARMONY_NOTE_BEATS * beat,
        );
    }
}

fn render_line<F: AudioFacility>(
    synth: &mut VoiceSynthesizer<F>,
    timbre: Timbre,
    line: &[Option<f32>],
    bar_start: f64,
    step: f64,
    duration: f64,
) {
    for (i, slot) in line.iter().enumerate() {
        if let Some(frequency) = *slot {
            synth.render_note(timbre, frequency, bar_start + i as f64 * step, duration as f32);
        }
    }
}

/// Kick on beat 0, snare on beat 2, hi-hat on every off-beat.
fn render_percussion<F: AudioFacility>(
    profile: &LevelMusicProfile,
    bar_start: f64,
    synth: &mut VoiceSynthesizer<F>,
) {
    let beat = profile.beat;

    synth.render_note(Timbre::PercussionLow, KICK_FREQUENCY, bar_start, KICK_DURATION);
    synth.render_note(
        Timbre::PercussionMid,
        SNARE_FREQUENCY,
        bar_start + 2.0 * beat,
        SNARE_DURATION,
    );
    for i in 0..4 {
        synth.render_note(
            Timbre::PercussionHiHat,
            HIHAT_CUTOFF,
            bar_start + (i as f64 + 0.5) * beat,
            HIHAT_DURATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        composition::{composition_for_level, NoteSlot, REST},
        synth::synthesizer::testing::RecordingFacility,
    };

    fn setup() -> (RecordingFacility, VoiceSynthesizer<RecordingFacility>) {
        let facility = RecordingFacility::running();
        let synth = VoiceSynthesizer::new(facility.clone());
        (facility, synth)
    }

    fn count_notes(line: &[NoteSlot]) -> usize {
        line.iter().flatten().count()
    }

    #[test]
    fn start_renders_bar_zero_immediately() {
        let (facility, mut synth) = setup();
        let mut scheduler = PlaybackScheduler::new();

        assert!(scheduler.start(1, Instant::now(), &mut synth));

        let piece = composition_for_level(1);
        let first = piece.section_at(0).unwrap();
        assert_eq!(facility.count(Timbre::Melody), count_notes(&first.melody));
        assert_eq!(facility.count(Timbre::Bass), count_notes(&first.bass));
        assert_eq!(
            facility.count(Timbre::Harmony),
            first.harmony.as_ref().map_or(0, |h| count_notes(h))
        );
        assert_eq!(facility.count(Timbre::PercussionLow), 1);
        assert_eq!(facility.count(Timbre::PercussionMid), 1);
        assert_eq!(facility.count(Timbre::PercussionHiHat), 4);
        assert_eq!(scheduler.current_bar(), Some(1));
    }

    #[test]
    fn note_times_follow_the_beat_grid() {
        let (facility, mut synth) = setup();
        facility.set_now(10.0);
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, Instant::now(), &mut synth);

        // 120 BPM: beat 0.5 s, sixteenth 0.125 s, eighth 0.25 s
        let requests = facility.requests();
        let melody: Vec<_> = requests.iter().filter(|r| r.timbre == Timbre::Melody).collect();
        assert_eq!(melody[0].start, 10.0);
        assert_eq!(melody[1].start, 10.125);
        assert!((melody[0].duration - 0.11).abs() < 1e-6);

        let bass: Vec<_> = requests.iter().filter(|r| r.timbre == Timbre::Bass).collect();
        assert_eq!(bass[0].start, 10.0);
        assert!((bass[0].duration - 0.225).abs() < 1e-6);

        let snare = requests
            .iter()
            .find(|r| r.timbre == Timbre::PercussionMid)
            .unwrap();
        assert_eq!(snare.start, 11.0);

        let hats: Vec<f64> = requests
            .iter()
            .filter(|r| r.timbre == Timbre::PercussionHiHat)
            .map(|r| r.start)
            .collect();
        assert_eq!(hats, vec![10.25, 10.75, 11.25, 11.75]);
    }

    #[test]
    fn rest_slots_never_render() {
        let (facility, mut synth) = setup();
        let section = Section {
            melody: [REST; 16],
            bass: [Some(98.0), REST, REST, REST, REST, REST, REST, REST],
            harmony: None,
        };

        render_bar(&section, &LevelMusicProfile::for_level(1), 0.0, &mut synth);

        assert_eq!(facility.count(Timbre::Melody), 0);
        assert_eq!(facility.count(Timbre::Harmony), 0);
        assert_eq!(facility.count(Timbre::Bass), 1);
    }

    #[test]
    fn each_bar_starts_at_a_fresh_clock_read() {
        let (facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);
        facility.clear();

        // Audio clock drifted off the 2 s bar grid
        facility.set_now(2.137);
        scheduler.update(t0 + Duration::from_secs(2), &mut synth);

        let kick = facility
            .requests()
            .into_iter()
            .find(|r| r.timbre == Timbre::PercussionLow)
            .unwrap();
        assert_eq!(kick.start, 2.137);

        let snare = facility
            .requests()
            .into_iter()
            .find(|r| r.timbre == Timbre::PercussionMid)
            .unwrap();
        assert!((snare.start - 3.137).abs() < 1e-9);
    }

    #[test]
    fn nothing_fires_before_the_deadline() {
        let (facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);
        facility.clear();

        scheduler.update(t0 + Duration::from_millis(1_999), &mut synth);
        assert!(facility.requests().is_empty());
        assert_eq!(scheduler.current_bar(), Some(1));

        scheduler.update(t0 + Duration::from_secs(2), &mut synth);
        assert!(!facility.requests().is_empty());
        assert_eq!(scheduler.current_bar(), Some(2));
    }

    #[test]
    fn bar_index_wraps_after_the_whole_structure() {
        let (_facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);

        let len = composition_for_level(1).bar_count();
        // start already played one bar
        for k in 1..len {
            scheduler.update(t0 + Duration::from_secs(2 * k as u64), &mut synth);
        }
        assert_eq!(scheduler.current_bar(), Some(0));
    }

    #[test]
    fn second_start_is_a_no_op() {
        let (facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);
        let rendered = facility.requests().len();
        let deadline = scheduler.next_deadline();

        assert!(!scheduler.start(3, t0 + Duration::from_millis(500), &mut synth));
        assert_eq!(facility.requests().len(), rendered);
        assert_eq!(scheduler.current_bar(), Some(1));
        assert_eq!(scheduler.next_deadline(), deadline);
        assert_eq!(scheduler.profile().unwrap().level, 1);
    }

    #[test]
    fn stop_cancels_future_bars() {
        let (facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);
        scheduler.stop();
        facility.clear();

        scheduler.update(t0 + Duration::from_secs(10), &mut synth);
        assert!(facility.requests().is_empty());
        assert!(!scheduler.is_playing());
        assert_eq!(scheduler.current_bar(), None);
    }

    #[test]
    fn restart_uses_the_new_level() {
        let (_facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);
        scheduler.update(t0 + Duration::from_secs(2), &mut synth);
        scheduler.stop();

        scheduler.start(6, t0 + Duration::from_secs(3), &mut synth);
        assert_eq!(scheduler.current_bar(), Some(1));
        let profile = scheduler.profile().unwrap();
        assert_eq!(profile.tempo_bpm, 140.0);
        assert_eq!(profile.composition_index, 0);
    }

    #[test]
    fn late_host_skips_missed_bars() {
        let (facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);

        let late = t0 + Duration::from_secs(9);
        scheduler.update(late, &mut synth);
        assert_eq!(scheduler.current_bar(), Some(2));
        assert_eq!(scheduler.next_deadline(), Some(late + Duration::from_secs(2)));

        facility.clear();
        scheduler.update(late + Duration::from_millis(10), &mut synth);
        assert!(facility.requests().is_empty());
    }

    #[test]
    fn on_time_bars_keep_their_grid() {
        let (_facility, mut synth) = setup();
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();
        scheduler.start(1, t0, &mut synth);

        // a slightly late tick does not push later deadlines back
        scheduler.update(t0 + Duration::from_millis(2_030), &mut synth);
        assert_eq!(scheduler.next_deadline(), Some(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn bars_advance_while_silent() {
        let facility = RecordingFacility::default();
        let mut synth = VoiceSynthesizer::new(facility.clone());
        let t0 = Instant::now();
        let mut scheduler = PlaybackScheduler::new();

        scheduler.start(2, t0, &mut synth);
        scheduler.update(t0 + Duration::from_secs(2), &mut synth);
        assert!(facility.requests().is_empty());
        assert_eq!(scheduler.current_bar(), Some(2));
    }
}
