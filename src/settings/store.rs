//! Settings persistence.
//!
//! `SettingsState` owns the live settings record and writes it through a
//! `SettingsBackend` whenever it changes. Only settings are persisted; game
//! sessions live in memory.
//!
//! The stored value under [`STORAGE_KEY`] is a versioned envelope:
//!
//! ```json
//! {"state":{"settings":{"reactionTimeLimit":0,...}},"version":0}
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::model::{GameSettings, SettingsPatch};
use crate::error::SettingsError;

/// Namespace key the settings record is stored under.
pub const STORAGE_KEY: &str = "nanjamonja-game-storage";

/// Envelope version written by this crate.
pub const STORAGE_VERSION: u32 = 0;

/// Key-value persistence for settings.
pub trait SettingsBackend {
    /// Read the raw value stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Replace the raw value stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Use `dir` for storage. Created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform config directory:
    /// - Linux: ~/.config/nanjamonja
    /// - macOS: ~/Library/Application Support/io.nanjamonja.nanjamonja
    /// - Windows: C:\Users\<User>\AppData\Roaming\nanjamonja\nanjamonja\config
    pub fn default_location() -> Result<Self, SettingsError> {
        ProjectDirs::from("io", "nanjamonja", "nanjamonja")
            .map(|dirs| Self::new(dirs.config_dir()))
            .ok_or(SettingsError::NoConfigDir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory backend for tests and hosts without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: FxHashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if written by an earlier run.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    settings: GameSettings,
}

fn encode(settings: &GameSettings) -> Result<String, SettingsError> {
    let envelope = Envelope {
        state: PersistedState {
            settings: settings.clone(),
        },
        version: STORAGE_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode(raw: &str) -> Result<GameSettings, SettingsError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != STORAGE_VERSION {
        return Err(SettingsError::UnsupportedVersion {
            found: envelope.version,
            expected: STORAGE_VERSION,
        });
    }
    Ok(envelope.state.settings)
}

/// Live settings plus where they are persisted.
pub struct SettingsState {
    settings: GameSettings,
    backend: Box<dyn SettingsBackend>,
}

impl std::fmt::Debug for SettingsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsState").field("settings", &self.settings).finish_non_exhaustive()
    }
}

impl SettingsState {
    /// Load settings from `backend`.
    ///
    /// Missing records yield defaults. Unreadable or incompatible records
    /// are logged and replaced by defaults.
    pub fn load(backend: Box<dyn SettingsBackend>) -> Self {
        match Self::try_load(backend) {
            Ok(state) => state,
            Err((err, backend)) => {
                tracing::warn!(error = %err, "failed to load settings, using defaults");
                Self {
                    settings: GameSettings::default(),
                    backend,
                }
            }
        }
    }

    /// Load settings, handing the backend back on failure.
    pub fn try_load(
        backend: Box<dyn SettingsBackend>,
    ) -> Result<Self, (SettingsError, Box<dyn SettingsBackend>)> {
        let loaded = match backend.load(STORAGE_KEY) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => Ok(GameSettings::default()),
            Err(e) => Err(e),
        };
        match loaded {
            Ok(settings) => {
                tracing::debug!(?settings, "settings loaded");
                Ok(Self { settings, backend })
            }
            Err(e) => Err((e, backend)),
        }
    }

    /// Settings held only in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            settings: GameSettings::default(),
            backend: Box::new(MemoryBackend::new()),
        }
    }

    #[must_use]
    pub fn get(&self) -> &GameSettings {
        &self.settings
    }

    /// Merge `patch` and persist if anything changed.
    ///
    /// The in-memory record is updated even when saving fails.
    pub fn update(&mut self, patch: &SettingsPatch) -> Result<bool, SettingsError> {
        if !self.settings.apply(patch) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Write the current record to the backend.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        let raw = encode(&self.settings)?;
        self.backend.save(STORAGE_KEY, &raw)
    }

    #[must_use]
    pub fn backend(&self) -> &dyn SettingsBackend {
        self.backend.as_ref()
    }
}
