//! Device setup and the key-driven event loop

use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use ratatui::DefaultTerminal;
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{info, warn};

use devilbox_audio::{
    engine::{self, BusLevels, EngineHandle},
    Preferences, SoundSystem,
};

use super::ui::{self, Snapshot};

/// Sample rate used when no device is open
const FALLBACK_SAMPLE_RATE: f32 = 48_000.0;
/// Peaks buffered between UI frames
const METER_CAPACITY: usize = 64;
const VOLUME_STEP: f32 = 0.1;

pub struct App {
    sound: SoundSystem<EngineHandle>,
    /// Kept alive for as long as audio should play
    _stream: Option<cpal::Stream>,
    /// Per-callback output peaks from the audio thread
    meter_rx: Consumer<f32>,
    peak: f32,
    sample_rate: f32,
    level: u32,
    last_event: String,
    prefs_path: PathBuf,
    should_quit: bool,
}

impl App {
    pub fn new(prefs_path: PathBuf) -> EyreResult<Self> {
        let prefs = Preferences::load_or_default(&prefs_path);
        let levels = Arc::new(BusLevels::default());
        let (meter_tx, meter_rx) = RingBuffer::<f32>::new(METER_CAPACITY);

        // Without a device the engine is simply dropped; the handle then
        // reports itself unavailable and every render is silent.
        let (stream, sample_rate, handle) = match open_output(Arc::clone(&levels), meter_tx) {
            Ok((stream, sample_rate, handle)) => (Some(stream), sample_rate, handle),
            Err(err) => {
                warn!(%err, "no audio output; running silently");
                let (_engine, handle) = engine::channel(FALLBACK_SAMPLE_RATE, levels);
                (None, FALLBACK_SAMPLE_RATE, handle)
            }
        };

        Ok(Self {
            sound: SoundSystem::with_engine(handle, prefs),
            _stream: stream,
            meter_rx,
            peak: 0.0,
            sample_rate,
            level: 1,
            last_event: String::from("press space to enable sound"),
            prefs_path,
            should_quit: false,
        })
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.sound.update(Instant::now());
            self.poll_meter();

            let snapshot = self.snapshot();
            terminal.draw(|frame| ui::render(frame, &snapshot))?;

            // ~60fps; also the resolution of the bar timer
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn save_preferences(&self) -> EyreResult<()> {
        self.sound
            .preferences()
            .save(&self.prefs_path)
            .wrap_err_with(|| format!("saving {}", self.prefs_path.display()))?;
        info!(path = %self.prefs_path.display(), "preferences saved");
        Ok(())
    }

    fn poll_meter(&mut self) {
        // Decay so the meter falls back when output goes quiet
        self.peak *= 0.9;
        while let Ok(peak) = self.meter_rx.pop() {
            self.peak = self.peak.max(peak);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let now = Instant::now();
        let mut rng = rand::rng();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.sound.on_ui_click();
                self.last_event = String::from("click");
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.level = c as u32 - '0' as u32;
                self.sound.stop_music();
                self.sound.start_music(self.level, now);
                self.last_event = format!("start level {}", self.level);
            }
            KeyCode::Char('s') => {
                self.sound.stop_music();
                self.last_event = String::from("stop music");
            }
            KeyCode::Char('c') => {
                let energy = rng.random_range(0.0..2.5);
                self.sound.on_particle_collision(energy, now);
                self.last_event = format!("collision, energy {energy:.2}");
            }
            KeyCode::Char('w') => {
                let speed = rng.random_range(0.0..400.0);
                self.sound.on_wall_bounce(speed, now);
                self.last_event = format!("wall bounce, speed {speed:.0}");
            }
            KeyCode::Char('o') => {
                self.sound.on_door_open();
                self.last_event = String::from("door open");
            }
            KeyCode::Char('p') => {
                self.sound.on_door_close();
                self.last_event = String::from("door close");
            }
            KeyCode::Char('l') => {
                self.sound.on_level_complete();
                self.last_event = String::from("level complete");
            }
            KeyCode::Char('m') => {
                let enabled = !self.sound.mixer().music_enabled();
                self.sound.set_music_enabled(enabled);
                self.last_event = format!("music {}", on_off(enabled));
            }
            KeyCode::Char('f') => {
                let enabled = !self.sound.mixer().sfx_enabled();
                self.sound.set_sfx_enabled(enabled);
                self.last_event = format!("effects {}", on_off(enabled));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.sound.set_music_volume(self.sound.mixer().music_volume() + VOLUME_STEP);
            }
            KeyCode::Char('-') => {
                self.sound.set_music_volume(self.sound.mixer().music_volume() - VOLUME_STEP);
            }
            KeyCode::Char(']') => {
                self.sound.set_sfx_volume(self.sound.mixer().sfx_volume() + VOLUME_STEP);
            }
            KeyCode::Char('[') => {
                self.sound.set_sfx_volume(self.sound.mixer().sfx_volume() - VOLUME_STEP);
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> Snapshot {
        let mixer = self.sound.mixer();
        let profile = self.sound.music_profile();

        Snapshot {
            level: self.level,
            composition: self.sound.composition().map(|c| (c.name, c.tonal_center, c.bar_count())),
            tempo_bpm: profile.map(|p| p.tempo_bpm),
            next_bar: self.sound.current_bar(),
            audible: self.sound.is_audible(),
            clock: self.sound.synthesizer().now(),
            sample_rate: self.sample_rate,
            music_volume: mixer.music_volume(),
            music_enabled: mixer.music_enabled(),
            sfx_volume: mixer.sfx_volume(),
            sfx_enabled: mixer.sfx_enabled(),
            peak: self.peak,
            last_event: self.last_event.clone(),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Open the default output device and move a fresh engine into its callback.
fn open_output(
    levels: Arc<BusLevels>,
    mut meter_tx: Producer<f32>,
) -> EyreResult<(cpal::Stream, f32, EngineHandle)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    info!(sample_rate, channels, "opened output device");

    let (mut engine, handle) = engine::channel(sample_rate, levels);

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            engine.render_interleaved(data, channels);
            let peak = data.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
            let _ = meter_tx.push(peak);
        },
        |err| warn!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    Ok((stream, sample_rate, handle))
}
