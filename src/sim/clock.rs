//! Frame timing and deferred calls
//!
//! A deferred call is a closure run against the level loader once its delay
//! has elapsed. Calls live only as long as the level that scheduled them:
//! the owner clears the clock on every level load.

use super::level::LevelLoader;

/// Work to run after a delay
pub type Deferred = Box<dyn FnOnce(&mut dyn LevelLoader)>;

/// Frame time source and delayed-call scheduler
pub trait FrameClock {
    /// Seconds since the previous frame
    fn delta_time(&self) -> f32;
    /// Run `callback` once, on the frame thread, at least `seconds` from now
    fn after(&mut self, seconds: f32, callback: Deferred);
}

struct PendingCall {
    due_at: f64,
    callback: Deferred,
}

/// Frame clock driven by the owning loop
pub struct GameClock {
    delta: f32,
    /// Seconds since the clock was created
    elapsed: f64,
    pending: Vec<PendingCall>,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            delta: 0.0,
            elapsed: 0.0,
            pending: Vec::new(),
        }
    }

    /// Start a frame lasting `dt` seconds
    pub fn begin_frame(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.delta = dt;
        self.elapsed += dt as f64;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of calls still waiting
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return every call whose delay has elapsed, oldest first
    pub fn take_due(&mut self) -> Vec<Deferred> {
        let now = self.elapsed;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|call| call.due_at <= now);
        self.pending = waiting;
        due.into_iter().map(|call| call.callback).collect()
    }

    /// Run every due call against `levels`. Returns how many ran.
    pub fn fire_due(&mut self, levels: &mut dyn LevelLoader) -> usize {
        let due = self.take_due();
        let count = due.len();
        for callback in due {
            callback(&mut *levels);
        }
        count
    }

    /// Drop all pending calls (level teardown)
    pub fn clear(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Discarding {} pending call(s)", self.pending.len());
        }
        self.pending.clear();
    }
}

impl FrameClock for GameClock {
    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn after(&mut self, seconds: f32, callback: Deferred) {
        let seconds = seconds.max(0.0) as f64;
        self.pending.push(PendingCall {
            due_at: self.elapsed + seconds,
            callback,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LevelSequence;

    #[test]
    fn test_fires_at_delay() {
        let mut clock = GameClock::new();
        let mut levels = LevelSequence::new(5);

        clock.begin_frame(0.5);
        clock.after(1.0, Box::new(|levels: &mut dyn LevelLoader| levels.load(3)));
        assert_eq!(clock.fire_due(&mut levels), 0);

        clock.begin_frame(0.5);
        assert_eq!(clock.fire_due(&mut levels), 0);
        assert_eq!(levels.current_index(), 0);

        clock.begin_frame(0.5);
        assert_eq!(clock.fire_due(&mut levels), 1);
        assert_eq!(levels.current_index(), 3);
    }

    #[test]
    fn test_fires_once() {
        let mut clock = GameClock::new();
        let mut levels = LevelSequence::new(5);

        clock.after(0.25, Box::new(|levels: &mut dyn LevelLoader| levels.load(1)));
        clock.begin_frame(1.0);
        assert_eq!(clock.fire_due(&mut levels), 1);
        clock.begin_frame(1.0);
        assert_eq!(clock.fire_due(&mut levels), 0);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_zero_delay_fires_same_frame() {
        let mut clock = GameClock::new();
        let mut levels = LevelSequence::new(2);
        clock.begin_frame(0.25);
        clock.after(0.0, Box::new(|levels: &mut dyn LevelLoader| levels.load(1)));
        assert_eq!(clock.fire_due(&mut levels), 1);
    }

    #[test]
    fn test_due_in_schedule_order() {
        let mut clock = GameClock::new();
        let mut levels = LevelSequence::new(5);
        clock.after(0.5, Box::new(|levels: &mut dyn LevelLoader| levels.load(1)));
        clock.after(0.5, Box::new(|levels: &mut dyn LevelLoader| levels.load(2)));
        clock.after(2.0, Box::new(|levels: &mut dyn LevelLoader| levels.load(4)));

        clock.begin_frame(1.0);
        assert_eq!(clock.fire_due(&mut levels), 2);
        assert_eq!(levels.current_index(), 2);
        assert_eq!(clock.pending_count(), 1);
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut clock = GameClock::new();
        let mut levels = LevelSequence::new(3);
        clock.after(0.5, Box::new(|levels: &mut dyn LevelLoader| levels.load(2)));
        clock.clear();
        clock.begin_frame(1.0);
        assert_eq!(clock.fire_due(&mut levels), 0);
        assert_eq!(levels.current_index(), 0);
    }

    #[test]
    fn test_negative_dt_clamped() {
        let mut clock = GameClock::new();
        clock.begin_frame(-1.0);
        assert_eq!(clock.delta_time(), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
