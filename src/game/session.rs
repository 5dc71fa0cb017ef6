//! Ephemeral game session state.
//!
//! ## Phases
//!
//! `NotStarted` -> `InProgress` -> `Over`, and back to `NotStarted` on
//! reset from anywhere.
//!
//! ## Card conservation
//!
//! Once a game is initialized every one of the sixty cards is in exactly
//! one place: the deck, the face-up slot, the discard pile, or a player's
//! collected pile.
//!
//! The engine is the only writer; everything here is read through
//! accessors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CharacterId, CharacterNames};
use crate::core::{Player, PlayerId, Timestamp};
use crate::events::EventLog;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

/// Everything about the game being played. Never persisted.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SessionState {
    /// Undealt cards; the top of the deck is the end of the vec.
    pub(crate) deck: Vec<Card>,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) current_card: Option<Card>,
    pub(crate) character_names: CharacterNames,
    /// Seat order is turn order. SmallVec avoids a heap allocation for
    /// typical table sizes.
    pub(crate) players: SmallVec<[Player; 4]>,
    pub(crate) current_player_index: usize,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) card_flipped_at: Option<Timestamp>,
    pub(crate) timer_expired: bool,
    pub(crate) events: EventLog,
}

impl SessionState {
    /// Undealt cards, top last.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// The flipped, unresolved card.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    #[must_use]
    pub fn character_names(&self) -> &CharacterNames {
        &self.character_names
    }

    #[must_use]
    pub fn character_name(&self, character: CharacterId) -> Option<&str> {
        self.character_names.get(character)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Decided once, when the deck runs out.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn card_flipped_at(&self) -> Option<Timestamp> {
        self.card_flipped_at
    }

    #[must_use]
    pub fn is_timer_expired(&self) -> bool {
        self.timer_expired
    }

    /// A card is face-up and its reaction window has not expired.
    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        self.card_flipped_at.is_some() && !self.timer_expired
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Cards accounted for across every location.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + usize::from(self.current_card.is_some())
            + self.players.iter().map(Player::score).sum::<usize>()
    }
}

/// Index of the player with the strictly highest score; ties keep the
/// earliest seat.
pub(crate) fn leading_player(players: &[Player]) -> Option<usize> {
    players
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (i, p)| match best {
            Some((_, score)) if score >= p.score() => best,
            _ => Some((i, p.score())),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};

    fn player_with(id: u8, cards: usize) -> Player {
        let mut p = Player::new(PlayerId::new(id), format!("P{id}"));
        let character = CharacterId::new(1).unwrap();
        p.collect((0..cards).map(|i| Card::new(CardId::new(i as u32), character)));
        p
    }

    #[test]
    fn test_default_session() {
        let s = SessionState::default();
        assert_eq!(s.phase(), Phase::NotStarted);
        assert!(!s.is_game_started());
        assert!(!s.is_game_over());
        assert!(s.current_player().is_none());
        assert!(s.winner().is_none());
        assert!(!s.is_timer_active());
        assert_eq!(s.total_cards(), 0);
        assert_eq!(s.events().last_id(), 0);
    }

    #[test]
    fn test_leading_player_strict_max() {
        let players = vec![player_with(0, 3), player_with(1, 7), player_with(2, 5)];
        assert_eq!(leading_player(&players), Some(1));
    }

    #[test]
    fn test_leading_player_tie_goes_to_first_seat() {
        let players = vec![player_with(0, 2), player_with(1, 6), player_with(2, 6)];
        assert_eq!(leading_player(&players), Some(1));

        let all_zero = vec![player_with(0, 0), player_with(1, 0)];
        assert_eq!(leading_player(&all_zero), Some(0));
    }

    #[test]
    fn test_leading_player_empty() {
        assert_eq!(leading_player(&[]), None);
    }

    #[test]
    fn test_timer_active_needs_flip_and_no_expiry() {
        let mut s = SessionState::default();
        s.card_flipped_at = Some(10);
        assert!(s.is_timer_active());
        s.timer_expired = true;
        assert!(!s.is_timer_active());
    }
}
