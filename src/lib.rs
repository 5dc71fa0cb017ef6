//! # nanjamonja
//!
//! Engine for a turn-based card naming game. Players flip cards showing
//! one of twelve characters, give each character a name the first time it
//! appears, and race to call the name when it shows up again. Whoever
//! claims a named card also takes every unclaimed card in the discard pile.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: `GameEngine` owns the session and is the only
//!    thing that mutates it. Commands run to completion synchronously.
//!
//! 2. **Sentinel commands**: A command whose preconditions fail changes
//!    nothing and returns `false`/`None`. The `try_` forms say why.
//!
//! 3. **Session vs settings**: The session lives in memory only. Settings
//!    are loaded on start and saved on change, independent of resets.
//!
//! ## Modules
//!
//! - `core`: Players, seeded RNG, clock
//! - `cards`: Cards, deck generation, character-name registry
//! - `events`: Game events and the append-only event log
//! - `game`: Session state, engine, observers
//! - `timer`: Reaction window tracking and expiry
//! - `settings`: Game settings and their persistence
//! - `error`: Rejection reasons and settings errors

pub mod core;
pub mod cards;
pub mod events;
pub mod game;
pub mod timer;
pub mod settings;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Clock, GameRng, ManualClock, Player, PlayerId, SystemClock, Timestamp};

pub use crate::cards::{generate_deck, Card, CardId, CharacterId, CharacterNames, DECK_SIZE};

pub use crate::events::{EventKind, EventLog, GameEvent, PlayerRef};

pub use crate::game::{
    parse_player_names, Change, FlipOutcome, GameEngine, GameEngineBuilder, Phase, SessionState,
    SubscriptionId,
};

pub use crate::timer::{format_millis, ReactionTimer, TimerReading};

pub use crate::settings::{
    FileBackend, GameSettings, MemoryBackend, SettingsBackend, SettingsPatch, SettingsState,
};

pub use crate::error::{Rejection, SettingsError};
