//! Core engine types: players, RNG, clock.
//!
//! These are the leaf building blocks the game engine is assembled from.

pub mod player;
pub mod rng;
pub mod clock;

pub use player::{Player, PlayerId, MAX_PLAYERS};
pub use rng::GameRng;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
