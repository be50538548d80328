//! Hardware check pattern
//!
//! Lights one position at a time, moving to the next one every
//! [`TEST_MS_DELAY`]. Each lap uses the next primary color so every
//! channel of every pixel gets exercised.

use embassy_time::{Duration, Instant};

use super::{Animation, FrameParams};
use crate::color::{BLACK, Rgb};

/// Delay between two steps of the test walk
pub const TEST_MS_DELAY: Duration = Duration::from_millis(250);

const LAP_COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

#[derive(Debug, Clone)]
pub struct TestPattern {
    started: Instant,
    step_delay: Duration,
}

impl Default for TestPattern {
    fn default() -> Self {
        Self {
            started: Instant::from_millis(0),
            step_delay: TEST_MS_DELAY,
        }
    }
}

impl TestPattern {
    /// Set the delay between steps
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Number of whole steps taken since the last reset
    pub fn step(&self, now: Instant) -> u64 {
        let delay_ms = self.step_delay.as_millis().max(1);
        now.saturating_duration_since(self.started).as_millis() / delay_ms
    }
}

impl Animation for TestPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, _params: &FrameParams, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        if leds.is_empty() {
            return;
        }

        let count = leds.len() as u64;
        let step = self.step(now);
        let position = (step % count) as usize;
        let lap = ((step / count) % LAP_COLORS.len() as u64) as usize;

        leds[position] = LAP_COLORS[lap];
    }

    fn reset(&mut self, now: Instant) {
        self.started = now;
    }
}
