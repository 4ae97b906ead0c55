pub mod composition; // Music as data: note tables, sections and the level catalog
pub mod dsp;
pub mod engine; // Audio-thread renderer, clock and buses
pub mod graph; // Composable audio graph nodes
pub mod mixer;
pub mod preferences;
pub mod scheduler;
pub mod sfx;
pub mod synth; // Timbres and transient voice scheduling
pub mod system;
pub mod voices;

pub use engine::{AudioFacility, Bus, FacilityError};
pub use mixer::MixerSettings;
pub use preferences::Preferences;
pub use system::SoundSystem;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
