//! Challenge countdown as an explicit, cancellable handle.
//!
//! The host drives time; the engine never spawns anything. A countdown lives
//! in a single `Option<Countdown>` slot, so at most one is ever live, and
//! every tick names the handle it was issued for. A tick carrying any other
//! handle is stale and ignored.

use serde::{Deserialize, Serialize};

/// Identity of one countdown. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A live countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub handle: TimerHandle,
    pub remaining: u32,
}

/// Result of delivering one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// The handle does not match the live countdown (or none is live).
    Stale,
    /// Still counting; carries the seconds left.
    Running(u32),
    /// Reached zero on this tick. The slot has been cleared.
    Expired,
}

/// The single countdown slot plus its handle allocator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountdownSlot {
    live: Option<Countdown>,
    next_handle: u64,
}

impl CountdownSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new countdown, cancelling any live one first.
    pub fn start(&mut self, seconds: u32) -> TimerHandle {
        self.cancel();
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.live = Some(Countdown {
            handle,
            remaining: seconds,
        });
        handle
    }

    /// Cancel the live countdown. Cancelling an empty slot is a no-op.
    ///
    /// Returns the handle that was cancelled, if any.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.live.take().map(|c| c.handle)
    }

    /// Deliver one tick addressed to `handle`.
    pub fn tick(&mut self, handle: TimerHandle) -> TickResult {
        match self.live.as_mut() {
            Some(countdown) if countdown.handle == handle => {
                countdown.remaining = countdown.remaining.saturating_sub(1);
                if countdown.remaining == 0 {
                    self.live = None;
                    TickResult::Expired
                } else {
                    TickResult::Running(countdown.remaining)
                }
            }
            _ => TickResult::Stale,
        }
    }

    /// The live countdown, if any.
    #[must_use]
    pub fn live(&self) -> Option<Countdown> {
        self.live
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut slot = CountdownSlot::new();
        let handle = slot.start(3);

        assert_eq!(slot.tick(handle), TickResult::Running(2));
        assert_eq!(slot.tick(handle), TickResult::Running(1));
        assert_eq!(slot.tick(handle), TickResult::Expired);
        assert!(!slot.is_live());
        assert_eq!(slot.tick(handle), TickResult::Stale);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut slot = CountdownSlot::new();
        let handle = slot.start(5);

        assert_eq!(slot.cancel(), Some(handle));
        assert_eq!(slot.cancel(), None);
        assert_eq!(slot.tick(handle), TickResult::Stale);
    }

    #[test]
    fn test_restart_invalidates_previous_handle() {
        let mut slot = CountdownSlot::new();
        let old = slot.start(15);
        let new = slot.start(15);

        assert_ne!(old, new);
        assert_eq!(slot.tick(old), TickResult::Stale);
        assert_eq!(slot.tick(new), TickResult::Running(14));
    }

    #[test]
    fn test_zero_second_countdown_expires_on_first_tick() {
        let mut slot = CountdownSlot::new();
        let handle = slot.start(0);
        assert_eq!(slot.tick(handle), TickResult::Expired);
    }
}
