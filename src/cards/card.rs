//! Physical cards and the characters printed on them.
//!
//! A `Card` is one of the sixty physical cards. Its `character` says which
//! of the twelve creatures it shows; `name` is the player-given name of that
//! creature, stamped onto the card when it is flipped after the character
//! has been named.

use serde::{Deserialize, Serialize};

/// Number of distinct characters in the deck.
pub const CHARACTER_COUNT: usize = 12;

/// Physical copies of each character.
pub const COPIES_PER_CHARACTER: usize = 5;

/// Total cards in a fresh deck.
pub const DECK_SIZE: usize = CHARACTER_COUNT * COPIES_PER_CHARACTER;

/// Unique identifier for a physical card, stable for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Character identifier in `1..=CHARACTER_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CharacterId(u8);

impl CharacterId {
    /// Create a character ID, or `None` if out of range.
    ///
    /// ```
    /// use nanjamonja::cards::CharacterId;
    ///
    /// assert!(CharacterId::new(1).is_some());
    /// assert!(CharacterId::new(12).is_some());
    /// assert!(CharacterId::new(0).is_none());
    /// assert!(CharacterId::new(13).is_none());
    /// ```
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id as usize <= CHARACTER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw ID value (1-based).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Zero-based slot for array-indexed tables.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over every character.
    pub fn all() -> impl Iterator<Item = CharacterId> {
        (1..=CHARACTER_COUNT as u8).map(CharacterId)
    }
}

impl TryFrom<u8> for CharacterId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("character id {value} out of range"))
    }
}

impl From<CharacterId> for u8 {
    fn from(id: CharacterId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique per physical card.
    pub id: CardId,

    /// Which creature the card shows.
    pub character: CharacterId,

    /// Registered name of the character, if it had one when flipped.
    pub name: Option<String>,
}

impl Card {
    /// Create an unnamed card.
    #[must_use]
    pub fn new(id: CardId, character: CharacterId) -> Self {
        Self {
            id,
            character,
            name: None,
        }
    }

    /// Whether the card carries a name (and can therefore be claimed).
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_character_id_range() {
        assert_eq!(CharacterId::all().count(), CHARACTER_COUNT);
        assert_eq!(CharacterId::new(1).map(CharacterId::slot), Some(0));
        assert_eq!(CharacterId::new(12).map(CharacterId::slot), Some(11));
        assert!(CharacterId::new(0).is_none());
        assert!(CharacterId::try_from(200).is_err());
    }

    #[test]
    fn test_character_id_serde_rejects_out_of_range() {
        let ok: CharacterId = serde_json::from_str("3").unwrap();
        assert_eq!(ok.raw(), 3);
        assert!(serde_json::from_str::<CharacterId>("13").is_err());
    }

    #[test]
    fn test_new_card_unnamed() {
        let card = Card::new(CardId::new(0), CharacterId::new(1).unwrap());
        assert!(!card.is_named());
        assert_eq!(format!("{}", card.character), "#1");
    }

    #[test]
    fn test_deck_size_constant() {
        assert_eq!(DECK_SIZE, 60);
    }
}
