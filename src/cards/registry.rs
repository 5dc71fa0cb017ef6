//! Character-name registry.
//!
//! Maps each character to the name it was first given. Entries are
//! write-once: after a character is named, the name holds for the rest of
//! the game. Backed by a fixed array of slots indexed by character.

use serde::{Deserialize, Serialize};

use super::card::{CharacterId, CHARACTER_COUNT};
use crate::error::Rejection;

/// Write-once names for the twelve characters.
///
/// ## Example
///
/// ```
/// use nanjamonja::cards::{CharacterId, CharacterNames};
///
/// let mut names = CharacterNames::new();
/// let fox = CharacterId::new(3).unwrap();
///
/// assert!(names.register(fox, "  Fluffy ").is_ok());
/// assert_eq!(names.get(fox), Some("Fluffy"));
/// assert!(names.register(fox, "Other").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterNames {
    slots: [Option<String>; CHARACTER_COUNT],
}

impl CharacterNames {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a character's name.
    #[must_use]
    pub fn get(&self, character: CharacterId) -> Option<&str> {
        self.slots[character.slot()].as_deref()
    }

    /// Whether the character has been named.
    #[must_use]
    pub fn contains(&self, character: CharacterId) -> bool {
        self.slots[character.slot()].is_some()
    }

    /// Name a character. The name is trimmed before storing.
    ///
    /// Fails if the character already has a name or the trimmed name is
    /// empty; the registry is unchanged on failure. Returns the stored name.
    pub fn register(&mut self, character: CharacterId, name: &str) -> Result<&str, Rejection> {
        let slot = &mut self.slots[character.slot()];
        if slot.is_some() {
            return Err(Rejection::AlreadyNamed(character));
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Rejection::BlankName);
        }
        Ok(slot.insert(trimmed.to_string()).as_str())
    }

    /// Number of named characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over (character, name) for named characters.
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &str)> {
        CharacterId::all().zip(self.slots.iter()).filter_map(|(c, s)| s.as_deref().map(|n| (c, n)))
    }
}
