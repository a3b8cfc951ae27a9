//! Fixed-interval animation clock
//!
//! The host feeds wall-clock deltas into [`Timeline::advance`]; the timeline
//! scales them by the playback rate and hands back the number of whole ticks
//! that are due. It never looks at a clock itself.

use std::fmt;

use crate::consts::*;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    Running,
    Paused,
}

type RateObserver = Box<dyn FnMut(f32)>;

/// Periodic tick scheduler with play/pause and a non-negative playback rate
pub struct Timeline {
    /// Seconds between ticks at rate 1.0
    interval: f32,
    rate: f32,
    status: AnimationStatus,
    /// Scaled time not yet consumed by a whole tick
    accumulator: f32,
    observers: Vec<RateObserver>,
}

impl Timeline {
    /// A running timeline at nominal rate
    ///
    /// An interval that is not a positive finite number falls back to
    /// `TICK_INTERVAL`.
    pub fn new(interval: f32) -> Self {
        let interval = if interval.is_finite() && interval > 0.0 {
            interval
        } else {
            log::warn!("invalid tick interval {}, using {}", interval, TICK_INTERVAL);
            TICK_INTERVAL
        };
        Self {
            interval,
            rate: DEFAULT_RATE,
            status: AnimationStatus::Running,
            accumulator: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == AnimationStatus::Running
    }

    pub fn play(&mut self) {
        if self.status != AnimationStatus::Running {
            self.status = AnimationStatus::Running;
            log::info!("animation playing (rate {:.2})", self.rate);
        }
    }

    /// Stop handing out ticks; the partial tick already accumulated is kept
    pub fn pause(&mut self) {
        if self.status != AnimationStatus::Paused {
            self.status = AnimationStatus::Paused;
            log::info!("animation paused");
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Set the playback rate, clamped at 0
    ///
    /// Non-finite values are ignored. Observers run only when the value changes.
    pub fn set_rate(&mut self, rate: f32) {
        if !rate.is_finite() {
            log::warn!("ignoring non-finite rate {}", rate);
            return;
        }
        let rate = rate.max(0.0);
        if rate == self.rate {
            return;
        }
        self.rate = rate;
        log::debug!("rate -> {:.2}", rate);
        for observer in self.observers.iter_mut() {
            observer(rate);
        }
    }

    pub fn increase_rate(&mut self, step: f32) {
        self.set_rate(self.rate + step);
    }

    pub fn decrease_rate(&mut self, step: f32) {
        self.set_rate((self.rate - step).max(0.0));
    }

    /// Register a callback invoked with the new rate after every change
    pub fn on_rate_changed(&mut self, observer: impl FnMut(f32) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Consume `elapsed` wall-clock seconds and return how many ticks are due
    ///
    /// Returns 0 while paused. At most `MAX_SUBSTEPS` ticks are returned per
    /// call; any whole ticks beyond that are dropped, the fractional remainder
    /// carries over to the next call.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.is_running() || !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }

        self.accumulator += elapsed * self.rate;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.interval;
            ticks += 1;
        }

        if self.accumulator >= self.interval {
            log::debug!(
                "dropping {} late ticks",
                (self.accumulator / self.interval) as u32
            );
            self.accumulator %= self.interval;
        }

        ticks
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("interval", &self.interval)
            .field("rate", &self.rate)
            .field("status", &self.status)
            .field("accumulator", &self.accumulator)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_starts_running_at_nominal_rate() {
        let timeline = Timeline::default();
        assert!(timeline.is_running());
        assert_eq!(timeline.rate(), 1.0);
    }

    #[test]
    fn test_bad_interval_falls_back() {
        for interval in [0.0, -0.05, f32::NAN, f32::INFINITY] {
            let mut timeline = Timeline::new(interval);
            assert_eq!(timeline.interval(), TICK_INTERVAL);
            assert_eq!(timeline.advance(1.0), MAX_SUBSTEPS);
            assert_eq!(timeline.advance(TICK_INTERVAL), 1);
        }
    }

    #[test]
    fn test_advance_one_interval_is_one_tick() {
        let mut timeline = Timeline::new(0.05);
        assert_eq!(timeline.advance(0.05), 1);
        assert_eq!(timeline.advance(0.025), 0);
        assert_eq!(timeline.advance(0.025), 1);
    }

    #[test]
    fn test_rate_scales_ticks() {
        let mut timeline = Timeline::new(0.05);
        timeline.set_rate(2.0);
        assert_eq!(timeline.advance(0.05), 2);

        timeline.set_rate(0.5);
        assert_eq!(timeline.advance(0.05), 0);
        assert_eq!(timeline.advance(0.05), 1);
    }

    #[test]
    fn test_zero_rate_freezes_but_keeps_running() {
        let mut timeline = Timeline::new(0.05);
        timeline.set_rate(0.0);
        assert!(timeline.is_running());
        assert_eq!(timeline.advance(10.0), 0);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut timeline = Timeline::new(0.05);
        assert_eq!(timeline.advance(1.0), MAX_SUBSTEPS);
        // Backlog gone: the next interval yields a single tick
        assert_eq!(timeline.advance(0.05), 1);
    }

    #[test]
    fn test_pause_keeps_partial_tick() {
        let mut timeline = Timeline::new(0.05);
        assert_eq!(timeline.advance(0.025), 0);
        timeline.pause();
        assert_eq!(timeline.advance(1.0), 0);
        timeline.play();
        assert_eq!(timeline.advance(0.025), 1);
    }

    #[test]
    fn test_play_and_pause_are_idempotent() {
        let mut timeline = Timeline::new(0.05);
        timeline.play();
        timeline.play();
        assert_eq!(timeline.status(), AnimationStatus::Running);

        timeline.pause();
        timeline.pause();
        assert_eq!(timeline.status(), AnimationStatus::Paused);

        timeline.play();
        assert_eq!(timeline.advance(0.05), 1);
    }

    #[test]
    fn test_decrease_floors_at_zero() {
        let mut timeline = Timeline::new(0.05);
        timeline.set_rate(0.05);
        for _ in 0..5 {
            timeline.decrease_rate(RATE_STEP);
            assert!(timeline.rate() >= 0.0);
        }
        assert_eq!(timeline.rate(), 0.0);
    }

    #[test]
    fn test_increase_is_linear() {
        let mut timeline = Timeline::new(0.05);
        for _ in 0..7 {
            timeline.increase_rate(RATE_STEP);
        }
        assert!((timeline.rate() - 1.7).abs() < 1e-5);
    }

    #[test]
    fn test_set_rate_clamps_and_ignores_nan() {
        let mut timeline = Timeline::new(0.05);
        timeline.set_rate(-3.0);
        assert_eq!(timeline.rate(), 0.0);
        timeline.set_rate(f32::NAN);
        assert_eq!(timeline.rate(), 0.0);
        timeline.set_rate(f32::INFINITY);
        assert_eq!(timeline.rate(), 0.0);
    }

    #[test]
    fn test_observers_fire_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut timeline = Timeline::new(0.05);
        {
            let seen = seen.clone();
            timeline.on_rate_changed(move |rate| seen.borrow_mut().push(rate));
        }

        timeline.set_rate(1.0); // unchanged
        timeline.set_rate(0.0);
        timeline.decrease_rate(RATE_STEP); // already at the floor
        timeline.set_rate(2.5);

        assert_eq!(*seen.borrow(), vec![0.0, 2.5]);
    }
}
