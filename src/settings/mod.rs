//! Persisted game settings.
//!
//! - `GameSettings`: the record (reaction limit and presentation toggles)
//! - `SettingsPatch`: partial update, shallow-merged
//! - `SettingsState`: live record plus its `SettingsBackend`
//!
//! Settings are independent of the game session: resetting a game never
//! touches them.

pub mod model;
pub mod store;

pub use model::{GameSettings, SettingsPatch};
pub use store::{
    FileBackend, MemoryBackend, SettingsBackend, SettingsState, STORAGE_KEY, STORAGE_VERSION,
};
