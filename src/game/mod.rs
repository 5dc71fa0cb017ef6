//! The game: session state, the engine that mutates it, and change
//! notification.
//!
//! - `SessionState`: deck, discard pile, face-up card, players, names, log
//! - `GameEngine`: commands and read-only projections over the session
//! - `Observers`: subscriber callbacks fired after each change

mod engine;
mod observer;
mod session;
mod setup;

pub use engine::{FlipOutcome, GameEngine, GameEngineBuilder};
pub use observer::{Change, Observers, SubscriptionId};
pub use session::{Phase, SessionState};
pub use setup::{can_start, parse_player_names, MAX_PLAYERS, MIN_PLAYERS};
