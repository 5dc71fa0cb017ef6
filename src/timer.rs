//! Reaction timer.
//!
//! The timer keeps no game state of its own. Each tick reads the flip time
//! and the configured limit from the engine, and when the window has run
//! out it expires the timer, discards the face-up card, and fires the
//! optional `on_expire` callback once.
//!
//! The host drives ticks on a fixed interval, either by calling
//! [`ReactionTimer::tick`] from its own scheduler or by calling
//! [`ReactionTimer::poll`] often and letting the timer keep the interval.
//!
//! ```
//! use nanjamonja::core::ManualClock;
//! use nanjamonja::game::GameEngine;
//! use nanjamonja::settings::SettingsPatch;
//! use nanjamonja::timer::ReactionTimer;
//!
//! let clock = ManualClock::new(0);
//! let mut engine = GameEngine::builder().seed(1).clock(clock.clone()).build();
//! engine.update_settings(&SettingsPatch::new().reaction_time_limit(1000));
//! engine.initialize_game(&["A", "B"]);
//! engine.flip_card();
//!
//! let mut timer = ReactionTimer::new();
//! clock.advance(400);
//! assert_eq!(timer.tick(&mut engine).remaining, 600);
//!
//! clock.advance(600);
//! let reading = timer.tick(&mut engine);
//! assert!(reading.is_expired);
//! assert_eq!(engine.discard_count(), 1);
//! ```

use tracing::debug;

use crate::core::Timestamp;
use crate::game::GameEngine;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Derived timer values for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerReading {
    pub elapsed: u64,
    /// Time left in the window; equals the limit while idle.
    pub remaining: u64,
    /// `elapsed / limit` clamped to 1, or 0 without a limit.
    pub progress: f64,
    pub is_active: bool,
    pub is_expired: bool,
    pub has_time_limit: bool,
}

impl TimerReading {
    #[must_use]
    pub fn formatted_elapsed(&self) -> String {
        format_millis(self.elapsed)
    }

    #[must_use]
    pub fn formatted_remaining(&self) -> String {
        format_millis(self.remaining)
    }
}

/// Render milliseconds as whole seconds and tenths, e.g. `"2.3s"`.
///
/// ```
/// assert_eq!(nanjamonja::timer::format_millis(2_345), "2.3s");
/// assert_eq!(nanjamonja::timer::format_millis(999), "0.9s");
/// ```
#[must_use]
pub fn format_millis(ms: u64) -> String {
    format!("{}.{}s", ms / 1000, (ms % 1000) / 100)
}

/// Compute the reading for the engine's current state without side effects.
#[must_use]
pub fn reading(engine: &GameEngine) -> TimerReading {
    let limit = engine.settings().reaction_time_limit;
    let has_time_limit = limit > 0;
    let is_expired = engine.is_timer_expired();

    if !engine.is_timer_active() {
        return TimerReading {
            elapsed: 0,
            remaining: limit,
            progress: 0.0,
            is_active: false,
            is_expired,
            has_time_limit,
        };
    }

    let elapsed = engine.reaction_time_elapsed();
    let (remaining, progress) = if has_time_limit {
        (limit.saturating_sub(elapsed), (elapsed as f64 / limit as f64).min(1.0))
    } else {
        (0, 0.0)
    };

    TimerReading {
        elapsed,
        remaining,
        progress,
        is_active: true,
        is_expired,
        has_time_limit,
    }
}

/// Drives reaction-window expiry.
pub struct ReactionTimer {
    tick_interval: u64,
    on_expire: Option<Box<dyn FnMut()>>,
    last_tick: Option<Timestamp>,
}

impl Default for ReactionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReactionTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionTimer")
            .field("tick_interval", &self.tick_interval)
            .field("has_on_expire", &self.on_expire.is_some())
            .field("last_tick", &self.last_tick)
            .finish()
    }
}

impl ReactionTimer {
    /// Timer ticking every [`DEFAULT_TICK_INTERVAL_MS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL_MS,
            on_expire: None,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, millis: u64) -> Self {
        self.tick_interval = millis.max(1);
        self
    }

    /// Callback fired once per expiry, e.g. for a sound or vibration.
    #[must_use]
    pub fn on_expire(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_expire = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn tick_interval(&self) -> u64 {
        self.tick_interval
    }

    /// Whether the host should keep a periodic tick scheduled.
    #[must_use]
    pub fn is_running(engine: &GameEngine) -> bool {
        engine.is_timer_active()
    }

    /// One tick: read the window and expire it if it has run out.
    pub fn tick(&mut self, engine: &mut GameEngine) -> TimerReading {
        let current = reading(engine);
        if !current.is_active || !current.has_time_limit || current.remaining > 0 {
            return current;
        }
        // Guard against a tick landing after the card was resolved elsewhere.
        if engine.is_timer_expired() {
            return current;
        }

        debug!(elapsed = current.elapsed, "reaction window ran out");
        engine.expire_timer();
        engine.add_to_discard_pile();
        if let Some(callback) = self.on_expire.as_mut() {
            callback();
        }

        TimerReading {
            remaining: 0,
            progress: 1.0,
            is_active: false,
            is_expired: true,
            ..current
        }
    }

    /// Tick if a full interval has passed since the last tick.
    ///
    /// Intervals are counted from the flip, so a host polling once per
    /// interval sees the first tick one interval after the flip. Returns
    /// `None` when no tick was due. Polling while no card is face-up
    /// cancels the schedule.
    pub fn poll(&mut self, engine: &mut GameEngine) -> Option<TimerReading> {
        let flipped_at = match engine.session().card_flipped_at() {
            Some(at) if engine.is_timer_active() => at,
            _ => {
                self.last_tick = None;
                return None;
            }
        };
        // A tick from before this flip belongs to an earlier card.
        let last = self.last_tick.filter(|&t| t >= flipped_at).unwrap_or(flipped_at);
        let now = engine.now();
        if now.saturating_sub(last) < self.tick_interval {
            self.last_tick = Some(last);
            return None;
        }
        self.last_tick = Some(now);
        Some(self.tick(engine))
    }
}
