//! Rotating color wheel
//!
//! Each position is offset along the phase ring by its index, so the
//! wheel is spread over the digits. The whole wheel advances one phase
//! step every [`RAINBOW_MS_PER_PHASE`].

use embassy_time::{Duration, Instant};

use super::{Animation, FrameParams};
use crate::color::{MAX_PHASE, Rgb, phase_to_color};

/// Time for the wheel to advance by one phase step
pub const RAINBOW_MS_PER_PHASE: u64 = 16;

/// Only a third of the wheel is shown across the strip at once
pub const RAINBOW_SPREAD_DIVISOR: u16 = 3;

#[derive(Debug, Clone)]
pub struct RainbowPattern {
    started: Instant,
    /// Time for one phase step
    step: Duration,
    spread_divisor: u16,
}

impl Default for RainbowPattern {
    fn default() -> Self {
        Self {
            started: Instant::from_millis(0),
            step: Duration::from_millis(RAINBOW_MS_PER_PHASE),
            spread_divisor: RAINBOW_SPREAD_DIVISOR,
        }
    }
}

impl RainbowPattern {
    /// Set the time for one phase step
    #[must_use]
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Set how much of the wheel is spread over the strip (1 = all of it)
    #[must_use]
    pub fn with_spread_divisor(mut self, divisor: u16) -> Self {
        self.spread_divisor = divisor.max(1);
        self
    }

    /// Phase of position 0 at `now`
    #[allow(clippy::cast_possible_truncation)]
    pub fn base_phase(&self, now: Instant, color_phase: u16) -> u16 {
        let step_ms = self.step.as_millis().max(1);
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        let advance = ((elapsed / step_ms) % u64::from(MAX_PHASE)) as u16;

        (color_phase % MAX_PHASE + advance) % MAX_PHASE
    }
}

impl Animation for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, params: &FrameParams, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let count = leds.len().min(usize::from(MAX_PHASE)) as u16;
        let per_position = u32::from((MAX_PHASE / count) / self.spread_divisor);
        let base = u32::from(self.base_phase(now, params.color_phase));

        for (index, led) in leds.iter_mut().enumerate() {
            let phase = (base + index as u32 * per_position) % u32::from(MAX_PHASE);
            *led = phase_to_color(phase as u16);
        }
    }

    fn reset(&mut self, now: Instant) {
        self.started = now;
    }
}
