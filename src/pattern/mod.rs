//! Pattern system with compile-time known pattern variants
//!
//! All pattern states are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Animation` trait.

mod envelope;
mod rainbow;
mod solid;
mod walk;

use core::fmt;

use embassy_time::Instant;
pub use envelope::{BreathPattern, PulsePattern, cycle_period};
pub use rainbow::{RAINBOW_MS_PER_PHASE, RAINBOW_SPREAD_DIVISOR, RainbowPattern};
pub use solid::{ConstantPattern, DarkPattern};
pub use walk::{TEST_MS_DELAY, TestPattern};

use crate::{color::Rgb, config::BacklightsConfig};

/// Number of selectable patterns
pub const NUM_PATTERNS: usize = 6;

/// Human-readable pattern names, indexed by pattern id
pub const PATTERN_LABELS: [&str; NUM_PATTERNS] =
    ["Dark", "Test", "Constant", "Rainbow", "Pulse", "Breath"];

const PATTERN_NAME_DARK: &str = "dark";
const PATTERN_NAME_TEST: &str = "test";
const PATTERN_NAME_CONSTANT: &str = "constant";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_PULSE: &str = "pulse";
const PATTERN_NAME_BREATH: &str = "breath";

const PATTERN_ID_DARK: u8 = 0;
const PATTERN_ID_TEST: u8 = 1;
const PATTERN_ID_CONSTANT: u8 = 2;
const PATTERN_ID_RAINBOW: u8 = 3;
const PATTERN_ID_PULSE: u8 = 4;
const PATTERN_ID_BREATH: u8 = 5;

/// Per-frame inputs taken from the bound configuration
#[derive(Debug, Clone, Copy)]
pub struct FrameParams {
    /// Base color phase (0..768)
    pub color_phase: u16,
    /// Pulse rate in beats per minute
    pub pulse_bpm: u8,
    /// Breath rate in breaths per minute
    pub breath_per_min: u8,
}

impl From<&BacklightsConfig> for FrameParams {
    fn from(config: &BacklightsConfig) -> Self {
        Self {
            color_phase: config.color_phase,
            pulse_bpm: config.pulse_bpm,
            breath_per_min: config.breath_per_min,
        }
    }
}

pub trait Animation {
    /// Render a single frame
    fn render(&mut self, now: Instant, params: &FrameParams, leds: &mut [Rgb]);

    /// Re-seed timers and internal state
    fn reset(&mut self, _now: Instant) {}
}

/// Selectable backlight patterns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Pattern {
    #[default]
    Dark = PATTERN_ID_DARK,
    Test = PATTERN_ID_TEST,
    Constant = PATTERN_ID_CONSTANT,
    Rainbow = PATTERN_ID_RAINBOW,
    Pulse = PATTERN_ID_PULSE,
    Breath = PATTERN_ID_BREATH,
}

/// Raw pattern id outside `0..NUM_PATTERNS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPattern(pub u8);

impl fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern id {}", self.0)
    }
}

impl Pattern {
    /// All patterns in id order
    pub const ALL: [Self; NUM_PATTERNS] = [
        Self::Dark,
        Self::Test,
        Self::Constant,
        Self::Rainbow,
        Self::Pulse,
        Self::Breath,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_DARK => Self::Dark,
            PATTERN_ID_TEST => Self::Test,
            PATTERN_ID_CONSTANT => Self::Constant,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_PULSE => Self::Pulse,
            PATTERN_ID_BREATH => Self::Breath,
            _ => return None,
        })
    }

    /// Pattern `step` places away, wrapping in both directions
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(self, step: i8) -> Self {
        let count = NUM_PATTERNS as i16;
        let index = (i16::from(self as u8) + i16::from(step)).rem_euclid(count);
        Self::ALL[index as usize]
    }

    /// Display label for the pattern
    pub const fn label(self) -> &'static str {
        PATTERN_LABELS[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => PATTERN_NAME_DARK,
            Self::Test => PATTERN_NAME_TEST,
            Self::Constant => PATTERN_NAME_CONSTANT,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Pulse => PATTERN_NAME_PULSE,
            Self::Breath => PATTERN_NAME_BREATH,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_DARK => Some(Self::Dark),
            PATTERN_NAME_TEST => Some(Self::Test),
            PATTERN_NAME_CONSTANT => Some(Self::Constant),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_PULSE => Some(Self::Pulse),
            PATTERN_NAME_BREATH => Some(Self::Breath),
            _ => None,
        }
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Dark => PatternSlot::Dark(DarkPattern),
            Self::Test => PatternSlot::Test(TestPattern::default()),
            Self::Constant => PatternSlot::Constant(ConstantPattern),
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::default()),
            Self::Pulse => PatternSlot::Pulse(PulsePattern::default()),
            Self::Breath => PatternSlot::Breath(BreathPattern::default()),
        }
    }
}

impl TryFrom<u8> for Pattern {
    type Error = InvalidPattern;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(InvalidPattern(value))
    }
}

/// Label lookup by raw pattern id
///
/// # Panics
///
/// Panics if `id` is not below [`NUM_PATTERNS`].
pub fn pattern_label(id: u8) -> &'static str {
    assert!(
        usize::from(id) < NUM_PATTERNS,
        "pattern id {} out of range",
        id
    );
    PATTERN_LABELS[usize::from(id)]
}

/// Pattern slot - enum containing all possible pattern states
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// All positions off
    Dark(DarkPattern),
    /// Hardware check walking one lit position
    Test(TestPattern),
    /// Single color from the configured phase
    Constant(ConstantPattern),
    /// Color wheel spread over the positions and rotating
    Rainbow(RainbowPattern),
    /// Configured color pulsing at `pulse_bpm`
    Pulse(PulsePattern),
    /// Configured color breathing at `breath_per_min`
    Breath(BreathPattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Dark(DarkPattern)
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, now: Instant, params: &FrameParams, leds: &mut [Rgb]) {
        match self {
            Self::Dark(pattern) => pattern.render(now, params, leds),
            Self::Test(pattern) => pattern.render(now, params, leds),
            Self::Constant(pattern) => pattern.render(now, params, leds),
            Self::Rainbow(pattern) => pattern.render(now, params, leds),
            Self::Pulse(pattern) => pattern.render(now, params, leds),
            Self::Breath(pattern) => pattern.render(now, params, leds),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self, now: Instant) {
        match self {
            Self::Dark(pattern) => Animation::reset(pattern, now),
            Self::Test(pattern) => Animation::reset(pattern, now),
            Self::Constant(pattern) => Animation::reset(pattern, now),
            Self::Rainbow(pattern) => Animation::reset(pattern, now),
            Self::Pulse(pattern) => Animation::reset(pattern, now),
            Self::Breath(pattern) => Animation::reset(pattern, now),
        }
    }

    /// Get the pattern for external observation
    pub fn id(&self) -> Pattern {
        match self {
            Self::Dark(_) => Pattern::Dark,
            Self::Test(_) => Pattern::Test,
            Self::Constant(_) => Pattern::Constant,
            Self::Rainbow(_) => Pattern::Rainbow,
            Self::Pulse(_) => Pattern::Pulse,
            Self::Breath(_) => Pattern::Breath,
        }
    }
}
