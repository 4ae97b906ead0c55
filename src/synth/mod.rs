//! Timbres and transient voice scheduling.
//!
//! This layer sits above the graph nodes: it names the instrument roles,
//! turns a note into a voice bound to an absolute start time, and hands that
//! voice to an audio facility.

pub mod message;
pub mod request;
pub mod synthesizer;
pub mod voice;

pub use request::{NoteRequest, Timbre};
pub use synthesizer::VoiceSynthesizer;
pub use voice::ScheduledVoice;
