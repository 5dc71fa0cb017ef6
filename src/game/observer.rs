//! Change notifications for UI layers.
//!
//! Subscribers are called synchronously, in subscription order, after the
//! engine has finished mutating state for a command.

use crate::cards::Card;
use crate::events::GameEvent;
use crate::settings::GameSettings;

/// What changed.
#[derive(Debug)]
pub enum Change<'a> {
    /// An event was appended to the log.
    Event(&'a GameEvent),
    /// The remaining deck was reshuffled.
    DeckShuffled,
    /// The face-up card moved to the discard pile.
    CardDiscarded(&'a Card),
    /// The reaction window ran out.
    TimerExpired,
    SettingsUpdated(&'a GameSettings),
    EventsCleared,
    /// The session went back to `NotStarted`.
    Reset,
}

/// Handle returned by `subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Change<'_>)>;

/// Ordered list of subscriber callbacks.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("subscribers", &self.subscribers.len()).finish()
    }
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Change<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, change: &Change<'_>) {
        for (_, callback) in &mut self.subscribers {
            callback(change);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let a = Rc::clone(&seen);
        observers.subscribe(move |_| a.borrow_mut().push("a"));
        let b = Rc::clone(&seen);
        observers.subscribe(move |_| b.borrow_mut().push("b"));

        observers.notify(&Change::DeckShuffled);
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();

        let c = Rc::clone(&count);
        let id = observers.subscribe(move |_| *c.borrow_mut() += 1);
        observers.notify(&Change::Reset);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&Change::Reset);

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}
