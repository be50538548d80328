//! Output intensity scaling
//!
//! The user-facing intensity is a 0..=7 level. Each level doubles the
//! output brightness, so level 7 passes colors through unchanged and
//! level 0 leaves roughly 1/256 of them.

use crate::{
    color::{Rgb, scale_color},
    config::MAX_INTENSITY,
};

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

/// Brightness (0-255) for an intensity level
///
/// Levels above [`MAX_INTENSITY`] are treated as the maximum.
pub const fn intensity_to_brightness(level: u8) -> u8 {
    let level = if level > MAX_INTENSITY { MAX_INTENSITY } else { level };
    0xFF >> (MAX_INTENSITY - level)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IntensityFilter {
    brightness: u8,
}

impl IntensityFilter {
    pub(crate) const fn new(level: u8) -> Self {
        Self {
            brightness: intensity_to_brightness(level),
        }
    }

    pub(crate) const fn set_level(&mut self, level: u8) {
        self.brightness = intensity_to_brightness(level);
    }
}

impl Filter for IntensityFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.brightness == 255 {
            return;
        }

        for pixel in frame.iter_mut() {
            *pixel = scale_color(*pixel, self.brightness);
        }
    }
}
