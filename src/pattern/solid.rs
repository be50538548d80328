//! Time-independent patterns

use embassy_time::Instant;

use super::{Animation, FrameParams};
use crate::color::{BLACK, Rgb, phase_to_color};

/// Every position off
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkPattern;

impl Animation for DarkPattern {
    fn render(&mut self, _now: Instant, _params: &FrameParams, leds: &mut [Rgb]) {
        leds.fill(BLACK);
    }
}

/// Every position shows the color of the configured phase
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantPattern;

impl Animation for ConstantPattern {
    fn render(&mut self, _now: Instant, params: &FrameParams, leds: &mut [Rgb]) {
        leds.fill(phase_to_color(params.color_phase));
    }
}
