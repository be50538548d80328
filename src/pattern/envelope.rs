//! Brightness envelope patterns
//!
//! Both patterns walk the phase ring once per period and use the
//! triangular envelope (up, down, rest) as brightness for the configured
//! base color.

use embassy_time::{Duration, Instant};

use super::{Animation, FrameParams};
use crate::{
    color::{MAX_PHASE, Rgb, phase_to_color, phase_to_intensity, scale_color},
    math8::{ease_in_out_quad, ring_progress},
};

const MS_PER_MINUTE: u64 = 60_000;

/// Envelope clock shared by the pulse and breath patterns
#[derive(Debug, Clone)]
struct Envelope {
    started: Instant,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            started: Instant::from_millis(0),
        }
    }
}

impl Envelope {
    /// Envelope brightness for a rate given in cycles per minute
    fn level(&self, now: Instant, per_minute: u8) -> u8 {
        let period = cycle_period(per_minute);
        let elapsed = now.saturating_duration_since(self.started);

        phase_to_intensity(ring_progress(elapsed, period, MAX_PHASE))
    }
}

/// Length of one envelope cycle
///
/// A rate of zero is treated as one cycle per minute.
#[allow(clippy::cast_lossless)]
pub const fn cycle_period(per_minute: u8) -> Duration {
    let per_minute = if per_minute == 0 { 1 } else { per_minute as u64 };
    Duration::from_millis(MS_PER_MINUTE / per_minute)
}

/// Configured color pulsing with a linear envelope
#[derive(Debug, Clone, Default)]
pub struct PulsePattern {
    envelope: Envelope,
}

impl Animation for PulsePattern {
    fn render(&mut self, now: Instant, params: &FrameParams, leds: &mut [Rgb]) {
        let level = self.envelope.level(now, params.pulse_bpm);
        leds.fill(scale_color(phase_to_color(params.color_phase), level));
    }

    fn reset(&mut self, now: Instant) {
        self.envelope.started = now;
    }
}

/// Configured color breathing with an eased envelope
#[derive(Debug, Clone, Default)]
pub struct BreathPattern {
    envelope: Envelope,
}

impl Animation for BreathPattern {
    fn render(&mut self, now: Instant, params: &FrameParams, leds: &mut [Rgb]) {
        let level = ease_in_out_quad(self.envelope.level(now, params.breath_per_min));
        leds.fill(scale_color(phase_to_color(params.color_phase), level));
    }

    fn reset(&mut self, now: Instant) {
        self.envelope.started = now;
    }
}
