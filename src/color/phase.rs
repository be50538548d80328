//! Phase ring color math
//!
//! A phase is a point on a 768-step ring. Split into three 256-step arcs,
//! the same ring drives both the hue wheel and the brightness envelope of
//! the breathing patterns:
//!
//! ```text
//!   0 ..= 255   ramp up     (intensity = phase)
//! 256 ..= 511   ramp down   (intensity = 511 - phase)
//! 512 ..= 767   rest        (intensity = 0)
//! ```

use crate::color::Rgb;

/// Number of steps on the phase ring
pub const MAX_PHASE: u16 = 768;

/// Length of one arc of the ring
pub const PHASE_ARC: u16 = MAX_PHASE / 3;

/// Reduce any phase onto the ring
#[inline]
pub const fn wrap_phase(phase: u16) -> u16 {
    phase % MAX_PHASE
}

/// Apply a signed offset to a phase, wrapping in both directions
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn offset_phase(phase: u16, delta: i32) -> u16 {
    let ring = i32::from(MAX_PHASE);
    (i32::from(phase) + delta).rem_euclid(ring) as u16
}

/// Triangular envelope with a rest third
///
/// Both ramps are inclusive: 255 and 256 are full brightness,
/// 511 and 512 are dark.
#[allow(clippy::cast_possible_truncation)]
pub const fn phase_to_intensity(phase: u16) -> u8 {
    let phase = wrap_phase(phase);
    if phase < PHASE_ARC {
        phase as u8
    } else if phase < 2 * PHASE_ARC {
        (2 * PHASE_ARC - 1 - phase) as u8
    } else {
        0
    }
}

/// Map a phase onto the color wheel
///
/// Each channel follows the intensity envelope shifted by one arc, so
/// phase 0 is pure red, 256 pure green and 512 pure blue, with linear
/// crossfades in between.
pub const fn phase_to_color(phase: u16) -> Rgb {
    let phase = wrap_phase(phase);
    Rgb {
        r: phase_to_intensity(phase + PHASE_ARC),
        g: phase_to_intensity(phase),
        b: phase_to_intensity(phase + 2 * PHASE_ARC),
    }
}
