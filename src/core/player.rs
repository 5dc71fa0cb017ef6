//! Players and their collected cards.
//!
//! ## PlayerId
//!
//! Stable seat identifier. Seat order is turn order; the first player is
//! `PlayerId(0)`, rendered as `player-0`.
//!
//! ## Player
//!
//! Display name plus the pile of cards won so far. The score is the size of
//! that pile and is never stored separately.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Most seats a game can have; one per `PlayerId` value.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Player identifier, 0-based seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// Yields at most [`MAX_PLAYERS`] ids.
    ///
    /// ```
    /// use nanjamonja::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    collected_cards: Vec<Card>,
}

impl Player {
    /// Seat a player with an empty pile.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            collected_cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards won, in the order they were collected.
    #[must_use]
    pub fn collected_cards(&self) -> &[Card] {
        &self.collected_cards
    }

    /// Score is the number of collected cards.
    #[must_use]
    pub fn score(&self) -> usize {
        self.collected_cards.len()
    }

    /// Append won cards to the pile.
    pub(crate) fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.collected_cards.extend(cards);
    }
}
