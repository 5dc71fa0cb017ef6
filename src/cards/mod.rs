//! Cards: physical cards, deck generation, and the character-name registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for one physical card
//! - `CharacterId`: Which of the twelve characters a card shows
//! - `Card`: A physical card, optionally carrying its character's name
//! - `CharacterNames`: Write-once character naming table
//!
//! `generate_deck` builds the unshuffled sixty-card deck.

pub mod card;
pub mod deck;
pub mod registry;

pub use card::{Card, CardId, CharacterId, CHARACTER_COUNT, COPIES_PER_CHARACTER, DECK_SIZE};
pub use deck::generate_deck;
pub use registry::CharacterNames;
