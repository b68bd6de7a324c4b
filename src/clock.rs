//! Tick source.
//!
//! `Clock` is the simulation's notion of time: a tick counter advanced once
//! per motion tick.  `Pacer` is the wall-clock side used by the binary to
//! fire those ticks at a fixed period.

use std::time::{Duration, Instant};

use crate::consts::{SPAWN_CHECK_EVERY, TICK_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    tick: u64,
}

impl Clock {
    /// A fresh session clock at tick 0.
    pub fn start() -> Self {
        Self { tick: 0 }
    }

    pub fn at_tick(tick: u64) -> Self {
        Self { tick }
    }

    pub fn advance(self) -> Self {
        Self {
            tick: self.tick + 1,
        }
    }

    pub fn tick(self) -> u64 {
        self.tick
    }

    /// Simulation time since session start.
    pub fn elapsed_ms(self) -> u64 {
        self.tick * TICK_MS
    }

    /// True on every tick that also runs the spawn-check (not tick 0).
    pub fn is_spawn_check(self) -> bool {
        self.tick > 0 && self.tick % SPAWN_CHECK_EVERY == 0
    }
}

/// Fixed-period wall-clock pacing with no accumulated drift.
///
/// The next deadline is always `previous deadline + period`, so a slow frame
/// shortens the following sleep instead of pushing every later tick back.
#[derive(Debug)]
pub struct Pacer {
    period: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Re-arm from now, e.g. after a restart.
    pub fn reset(&mut self) {
        self.next = Instant::now() + self.period;
    }

    /// Sleep until the next deadline, then schedule the one after.
    /// Returns how many periods elapsed (more than 1 when running behind).
    pub fn wait(&mut self) -> u32 {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
        }
        let mut due = 0;
        let now = Instant::now();
        while self.next <= now {
            self.next += self.period;
            due += 1;
        }
        due.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_check_every_twentieth_tick() {
        let checks: Vec<u64> = (0..=60)
            .map(Clock::at_tick)
            .filter(|c| c.is_spawn_check())
            .map(|c| c.tick())
            .collect();
        assert_eq!(checks, vec![20, 40, 60]);
    }

    #[test]
    fn elapsed_follows_ticks() {
        let c = Clock::start().advance().advance().advance();
        assert_eq!(c.tick(), 3);
        assert_eq!(c.elapsed_ms(), 150);
    }

    #[test]
    fn pacer_reports_at_least_one_period() {
        let mut pacer = Pacer::new(Duration::from_millis(1));
        assert!(pacer.wait() >= 1);
        std::thread::sleep(Duration::from_millis(5));
        assert!(pacer.wait() >= 2);
    }
}
