//! Append-only event log.
//!
//! Ids are handed out strictly increasing from 1. `last_id` is 0 while the
//! log has never been written or after a clear. Reads hand out an `im`
//! snapshot, so a renderer holding one never observes later appends.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, GameEvent};
use crate::core::Timestamp;

/// Ordered record of game events.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
    last_id: u64,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning the next id.
    pub fn append(&mut self, timestamp: Timestamp, kind: EventKind) -> &GameEvent {
        self.last_id += 1;
        self.events.push_back(GameEvent {
            id: self.last_id,
            timestamp,
            kind,
        });
        &self.events[self.events.len() - 1]
    }

    /// Drop every event and reset the id counter to 0.
    pub fn clear(&mut self) {
        self.events.clear();
        self.last_id = 0;
    }

    /// Start a fresh log whose first entry is `kind` with id 1.
    pub fn restart(&mut self, timestamp: Timestamp, kind: EventKind) -> &GameEvent {
        self.clear();
        self.append(timestamp, kind)
    }

    /// O(1) copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vector<GameEvent> {
        self.events.clone()
    }

    /// Id of the most recent event, 0 if none.
    #[must_use]
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
