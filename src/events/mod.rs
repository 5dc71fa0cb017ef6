//! Game history: event records and the append-only log that holds them.
//!
//! The engine is the only writer. Readers take snapshots.

pub mod event;
pub mod log;

pub use event::{EventKind, GameEvent, PlayerRef};
pub use log::EventLog;
