//! The game engine.
//!
//! `GameEngine` is the single writer of session state. UI code issues
//! commands; each command either applies completely (usually appending one
//! event) or is rejected with no change at all. Read access goes through
//! projection methods that never mutate.
//!
//! ## Commands
//!
//! | command               | rejected when                                  |
//! |-----------------------|------------------------------------------------|
//! | `flip_card`           | not in progress, card already face-up          |
//! | `register_name`       | character already named, blank name            |
//! | `claim_card`          | no face-up card, card unnamed, unknown player  |
//! | `next_turn`           | no players                                     |
//!
//! Each has a `try_` form returning the `Rejection` reason.
//!
//! ## Example
//!
//! ```
//! use nanjamonja::game::GameEngine;
//!
//! let mut engine = GameEngine::builder().seed(42).build();
//! engine.initialize_game(&["Alice", "Bob"]);
//! assert_eq!(engine.deck_count(), 60);
//!
//! let card = engine.flip_card().unwrap();
//! assert!(card.name.is_none());
//! assert!(engine.register_name(card.character, "Fluffy"));
//! assert!(!engine.register_name(card.character, "Spike"));
//! assert_eq!(engine.discard_count(), 1);
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::observer::{Change, Observers, SubscriptionId};
use super::session::{leading_player, Phase, SessionState};
use crate::cards::{generate_deck, Card, CharacterId};
use crate::core::{Clock, GameRng, Player, PlayerId, SystemClock, Timestamp, MAX_PLAYERS};
use crate::error::Rejection;
use crate::events::{EventKind, EventLog, GameEvent, PlayerRef};
use crate::settings::{GameSettings, SettingsBackend, SettingsPatch, SettingsState};

/// Result of a successful flip command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// A card is now face-up.
    Flipped(Card),
    /// The deck was empty; the game is over.
    GameOver { winner: Option<PlayerId> },
}

/// Builder for creating a GameEngine.
pub struct GameEngineBuilder {
    seed: Option<u64>,
    clock: Option<Box<dyn Clock>>,
    settings: Option<SettingsState>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            clock: None,
            settings: None,
        }
    }

    /// Fix the shuffle seed. Defaults to OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time source. Defaults to the system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Load settings from `backend` and persist changes back to it.
    pub fn settings_backend(mut self, backend: impl SettingsBackend + 'static) -> Self {
        self.settings = Some(SettingsState::load(Box::new(backend)));
        self
    }

    /// Use an already loaded settings state.
    pub fn settings(mut self, settings: SettingsState) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn build(self) -> GameEngine {
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        GameEngine {
            session: SessionState::default(),
            settings: self.settings.unwrap_or_else(SettingsState::in_memory),
            rng,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock) as Box<dyn Clock>),
            observers: Observers::new(),
        }
    }
}

/// Owns one game session plus the persisted settings.
pub struct GameEngine {
    session: SessionState,
    settings: SettingsState,
    rng: GameRng,
    clock: Box<dyn Clock>,
    observers: Observers,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("session", &self.session)
            .field("settings", &self.settings)
            .field("seed", &self.rng.seed())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Engine with entropy seed, system clock, and in-memory settings.
    #[must_use]
    pub fn new() -> Self {
        GameEngineBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    fn record(&mut self, kind: EventKind) {
        let now = self.clock.now_millis();
        let event = self.session.events.append(now, kind);
        debug!(event_id = event.id, kind = event.kind.type_name(), "{}", event);
        self.observers.notify(&Change::Event(event));
    }

    /// Move the face-up card, if any, to the discard pile.
    fn discard_current(&mut self) -> bool {
        let Some(card) = self.session.current_card.take() else {
            return false;
        };
        self.session.card_flipped_at = None;
        self.session.discard_pile.push(card);
        if let Some(card) = self.session.discard_pile.last() {
            debug!(card = %card.id, discard = self.session.discard_pile.len(), "card discarded");
            self.observers.notify(&Change::CardDiscarded(card));
        }
        true
    }

    // === Commands ===

    /// Start a new game with players seated in the given order.
    ///
    /// The caller supplies at least two non-blank names (see
    /// [`parse_player_names`](super::parse_player_names) and
    /// [`can_start`](super::can_start)). At most [`MAX_PLAYERS`] are seated;
    /// names past that are dropped with a warning. Everything from a
    /// previous session, including the event log, is discarded; settings
    /// are kept.
    pub fn initialize_game<S: AsRef<str>>(&mut self, player_names: &[S]) {
        if player_names.len() > MAX_PLAYERS {
            warn!(
                requested = player_names.len(),
                seated = MAX_PLAYERS,
                "too many players, extra names dropped"
            );
        }
        let players: SmallVec<[Player; 4]> = PlayerId::all(player_names.len())
            .zip(player_names)
            .map(|(id, name)| Player::new(id, name.as_ref()))
            .collect();
        let names: Vec<String> = players.iter().map(|p| p.name().to_string()).collect();
        let deck = self.rng.shuffled(&generate_deck());

        info!(player_count = players.len(), seed = self.rng.seed(), "game started");

        self.session = SessionState {
            deck,
            players,
            phase: Phase::InProgress,
            ..SessionState::default()
        };

        let now = self.clock.now_millis();
        let event = self
            .session
            .events
            .restart(now, EventKind::GameStarted { player_names: names });
        self.observers.notify(&Change::Event(event));
    }

    /// Reshuffle the undealt cards. Discard pile, piles, and turn order are
    /// untouched and no event is logged.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.session.deck);
        debug!(remaining = self.session.deck.len(), "deck shuffled");
        self.observers.notify(&Change::DeckShuffled);
    }

    /// Flip the top card, or end the game if the deck is empty.
    pub fn try_flip_card(&mut self) -> Result<FlipOutcome, Rejection> {
        if self.session.phase != Phase::InProgress {
            return Err(Rejection::NotInProgress);
        }
        if self.session.current_card.is_some() {
            return Err(Rejection::CardAlreadyFaceUp);
        }
        let Some(mut card) = self.session.deck.pop() else {
            return Ok(self.finish_game());
        };

        card.name = self.session.character_names.get(card.character).map(str::to_string);
        self.session.current_card = Some(card.clone());
        self.session.card_flipped_at = Some(self.clock.now_millis());
        self.session.timer_expired = false;

        self.record(EventKind::CardFlipped {
            character: card.character,
            character_name: card.name.clone(),
        });
        Ok(FlipOutcome::Flipped(card))
    }

    /// Flip the top card. `None` when the flip ended the game or was
    /// rejected.
    pub fn flip_card(&mut self) -> Option<Card> {
        match self.try_flip_card() {
            Ok(FlipOutcome::Flipped(card)) => Some(card),
            Ok(FlipOutcome::GameOver { .. }) => None,
            Err(reason) => {
                debug!(%reason, "flip rejected");
                None
            }
        }
    }

    fn finish_game(&mut self) -> FlipOutcome {
        let winner = leading_player(&self.session.players).map(|i| &self.session.players[i]);
        let winner_ref = winner.map(PlayerRef::from);
        let winner_id = winner.map(Player::id);
        let final_score = winner.map_or(0, Player::score);

        self.session.phase = Phase::Over;
        self.session.winner = winner_id;
        self.session.current_card = None;
        self.session.card_flipped_at = None;

        info!(winner = ?winner_id, final_score, "game over");
        self.record(EventKind::GameOver {
            winner: winner_ref,
            final_score,
        });
        FlipOutcome::GameOver { winner: winner_id }
    }

    /// Give a character its permanent name.
    ///
    /// On success the face-up card (named or not) goes to the discard pile,
    /// where it waits for a later claim.
    pub fn try_register_name(&mut self, character: CharacterId, name: &str) -> Result<(), Rejection> {
        let stored = self.session.character_names.register(character, name)?.to_string();
        let actor = self.session.current_player().map(PlayerRef::from);

        if let Some(card) = self
            .session
            .current_card
            .as_mut()
            .filter(|card| card.character == character)
        {
            card.name = Some(stored.clone());
        }

        self.record(EventKind::NameRegistered {
            player: actor,
            character,
            character_name: stored,
        });
        self.discard_current();
        Ok(())
    }

    pub fn register_name(&mut self, character: CharacterId, name: &str) -> bool {
        match self.try_register_name(character, name) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, %character, "name rejected");
                false
            }
        }
    }

    /// Award the face-up card plus the whole discard pile to `player`.
    /// Returns the number of cards won.
    pub fn try_claim_card(&mut self, player: PlayerId) -> Result<usize, Rejection> {
        let card = self.session.current_card.as_ref().ok_or(Rejection::NoFaceUpCard)?;
        let character_name = card.name.clone().ok_or(Rejection::UnnamedCard)?;
        let character = card.character;
        let seat = self
            .session
            .players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(Rejection::UnknownPlayer(player))?;

        let mut won = std::mem::take(&mut self.session.discard_pile);
        won.extend(self.session.current_card.take());
        self.session.card_flipped_at = None;
        let cards_won = won.len();

        let claimer = &mut self.session.players[seat];
        claimer.collect(won);
        debug!(%player, cards_won, score = claimer.score(), "cards claimed");
        let claimer = PlayerRef::from(&*claimer);

        self.record(EventKind::CardClaimed {
            player: claimer,
            character,
            character_name,
            cards_won,
        });
        Ok(cards_won)
    }

    pub fn claim_card(&mut self, player: PlayerId) -> bool {
        match self.try_claim_card(player) {
            Ok(_) => true,
            Err(reason) => {
                debug!(%reason, %player, "claim rejected");
                false
            }
        }
    }

    /// Pass the turn to the next seat, wrapping around.
    ///
    /// Does not check the phase; callers that care guard on
    /// [`is_game_over`](Self::is_game_over).
    pub fn try_next_turn(&mut self) -> Result<PlayerId, Rejection> {
        let count = self.session.players.len();
        if count == 0 {
            return Err(Rejection::NoPlayers);
        }
        let next = (self.session.current_player_index + 1) % count;
        self.session.current_player_index = next;

        let player = PlayerRef::from(&self.session.players[next]);
        let id = player.id;
        self.record(EventKind::TurnChanged { player });
        Ok(id)
    }

    pub fn next_turn(&mut self) {
        if let Err(reason) = self.try_next_turn() {
            debug!(%reason, "turn change rejected");
        }
    }

    /// Name a character, then advance the turn if auto-advance is on.
    pub fn name_and_advance(&mut self, character: CharacterId, name: &str) -> bool {
        let named = self.register_name(character, name);
        if named && self.settings.get().auto_advance_turn {
            self.next_turn();
        }
        named
    }

    /// Claim, then advance the turn if auto-advance is on.
    pub fn claim_and_advance(&mut self, player: PlayerId) -> bool {
        let claimed = self.claim_card(player);
        if claimed && self.settings.get().auto_advance_turn {
            self.next_turn();
        }
        claimed
    }

    /// Drop the session and return to `NotStarted`. Settings are kept.
    pub fn reset_game(&mut self) {
        self.session = SessionState::default();
        info!("game reset");
        self.observers.notify(&Change::Reset);
    }

    /// Shallow-merge `patch` into the settings and persist them.
    ///
    /// Persistence failures are logged; the in-memory settings still change.
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        let changed = match self.settings.update(patch) {
            Ok(changed) => changed,
            Err(err) => {
                warn!(error = %err, "failed to persist settings");
                true
            }
        };
        if changed {
            debug!(settings = ?self.settings.get(), "settings updated");
            self.observers.notify(&Change::SettingsUpdated(self.settings.get()));
        }
    }

    /// Mark the reaction window as expired. Idempotent.
    pub fn expire_timer(&mut self) {
        if self.session.timer_expired {
            return;
        }
        self.session.timer_expired = true;
        debug!("reaction window expired");
        self.observers.notify(&Change::TimerExpired);
    }

    /// Move the face-up card to the discard pile without naming or
    /// claiming it. Returns false if no card was face-up.
    pub fn add_to_discard_pile(&mut self) -> bool {
        self.discard_current()
    }

    /// Empty the event log and reset its ids. Game state is untouched.
    pub fn clear_events(&mut self) {
        self.session.events.clear();
        debug!("event log cleared");
        self.observers.notify(&Change::EventsCleared);
    }

    // === Observers ===

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, callback: impl FnMut(&Change<'_>) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Projections ===

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        self.settings.get()
    }

    #[must_use]
    pub fn settings_state(&self) -> &SettingsState {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.session.current_player()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.session.current_card()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.session.players()
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.session.deck.len()
    }

    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.session.discard_pile.len()
    }

    #[must_use]
    pub fn character_name(&self, character: CharacterId) -> Option<&str> {
        self.session.character_name(character)
    }

    /// Snapshot of the event log.
    #[must_use]
    pub fn events(&self) -> Vector<GameEvent> {
        self.session.events.snapshot()
    }

    #[must_use]
    pub fn event_log(&self) -> &EventLog {
        &self.session.events
    }

    #[must_use]
    pub fn is_game_started(&self) -> bool {
        self.session.is_game_started()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.session.winner()
    }

    #[must_use]
    pub fn is_timer_active(&self) -> bool {
        self.session.is_timer_active()
    }

    #[must_use]
    pub fn is_timer_expired(&self) -> bool {
        self.session.timer_expired
    }

    /// Milliseconds since the face-up card was flipped, 0 if none is.
    #[must_use]
    pub fn reaction_time_elapsed(&self) -> u64 {
        self.session
            .card_flipped_at
            .map_or(0, |at| self.now().saturating_sub(at))
    }

    /// Current time from the engine's clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now_millis()
    }

    /// Seed the session shuffles derive from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
