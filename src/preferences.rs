//! Persisted audio preferences.
//!
//! Four scalars read once at startup. On disk they are a small JSON object
//! with camelCase keys:
//!
//! ```json
//! { "musicVolume": 0.5, "sfxVolume": 0.7, "musicEnabled": true, "sfxEnabled": true }
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "serde")]
use tracing::{debug, info};

pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;
pub const DEFAULT_SFX_VOLUME: f32 = 0.7;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not access preferences file")]
    Io(#[from] std::io::Error),
    #[error("preferences file is malformed")]
    Parse(#[from] serde_json::Error),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

/// Clamp a volume to [0, 1]. NaN becomes 0.
pub(crate) fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

impl Preferences {
    /// The same preferences with volumes forced into range.
    pub fn sanitized(self) -> Self {
        Self {
            music_volume: clamp_volume(self.music_volume),
            sfx_volume: clamp_volume(self.sfx_volume),
            ..self
        }
    }
}

#[cfg(feature = "serde")]
impl Preferences {
    /// Read preferences from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file; using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_json(&text)
    }

    /// Like [`load`](Self::load), but any failure falls back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            info!(path = %path.display(), %err, "ignoring unreadable preferences");
            Self::default()
        })
    }

    pub fn from_json(text: &str) -> Result<Self, PreferencesError> {
        let prefs: Self = serde_json::from_str(text)?;
        Ok(prefs.sanitized())
    }

    pub fn to_json(&self) -> Result<String, PreferencesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PreferencesError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
