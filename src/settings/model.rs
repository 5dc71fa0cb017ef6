//! The settings record and partial updates to it.

use serde::{Deserialize, Serialize};

/// Player-facing game options. Survives session resets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    /// Reaction window in milliseconds; 0 disables the timer.
    pub reaction_time_limit: u64,
    pub enable_sound_effects: bool,
    pub enable_vibration: bool,
    /// Advance the turn automatically after a successful name or claim.
    pub auto_advance_turn: bool,
    pub show_character_hints: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            reaction_time_limit: 0,
            enable_sound_effects: true,
            enable_vibration: true,
            auto_advance_turn: true,
            show_character_hints: false,
        }
    }
}

impl GameSettings {
    /// Whether a reaction window is configured.
    #[must_use]
    pub fn has_time_limit(&self) -> bool {
        self.reaction_time_limit > 0
    }

    /// Shallow-merge a patch. Returns true if anything changed.
    pub fn apply(&mut self, patch: &SettingsPatch) -> bool {
        let before = self.clone();
        if let Some(v) = patch.reaction_time_limit {
            self.reaction_time_limit = v;
        }
        if let Some(v) = patch.enable_sound_effects {
            self.enable_sound_effects = v;
        }
        if let Some(v) = patch.enable_vibration {
            self.enable_vibration = v;
        }
        if let Some(v) = patch.auto_advance_turn {
            self.auto_advance_turn = v;
        }
        if let Some(v) = patch.show_character_hints {
            self.show_character_hints = v;
        }
        *self != before
    }
}

/// Partial settings update; `None` fields are left alone.
///
/// ```
/// use nanjamonja::settings::{GameSettings, SettingsPatch};
///
/// let mut settings = GameSettings::default();
/// settings.apply(&SettingsPatch::new().reaction_time_limit(3000));
/// assert_eq!(settings.reaction_time_limit, 3000);
/// assert!(settings.enable_sound_effects);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_time_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sound_effects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_vibration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_turn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_character_hints: Option<bool>,
}

impl SettingsPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reaction_time_limit(mut self, millis: u64) -> Self {
        self.reaction_time_limit = Some(millis);
        self
    }

    #[must_use]
    pub fn enable_sound_effects(mut self, on: bool) -> Self {
        self.enable_sound_effects = Some(on);
        self
    }

    #[must_use]
    pub fn enable_vibration(mut self, on: bool) -> Self {
        self.enable_vibration = Some(on);
        self
    }

    #[must_use]
    pub fn auto_advance_turn(mut self, on: bool) -> Self {
        self.auto_advance_turn = Some(on);
        self
    }

    #[must_use]
    pub fn show_character_hints(mut self, on: bool) -> Self {
        self.show_character_hints = Some(on);
        self
    }
}
