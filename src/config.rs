//! Persisted backlight settings
//!
//! The record is owned by the storage layer and only borrowed by the
//! engine. Fields are plain integers so the struct can be copied to and
//! from flash as-is.

use crate::color::MAX_PHASE;
use crate::pattern::Pattern;

/// Highest intensity level
pub const MAX_INTENSITY: u8 = 7;

/// Marker stored in [`BacklightsConfig::is_valid`] once the record has been written
pub const CONFIG_VALID_MARKER: u8 = 0x55;

pub const DEFAULT_PATTERN: Pattern = Pattern::Rainbow;
pub const DEFAULT_COLOR_PHASE: u16 = 0;
pub const DEFAULT_INTENSITY: u8 = MAX_INTENSITY - 1;
pub const DEFAULT_PULSE_BPM: u8 = 72;
pub const DEFAULT_BREATH_PER_MIN: u8 = 10;

/// Backlight settings record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklightsConfig {
    /// Pattern id, see [`Pattern`]
    pub pattern: u8,
    /// Intensity level (0..=7)
    pub intensity: u8,
    /// Base color phase (0..768)
    pub color_phase: u16,
    /// Pulse pattern rate in beats per minute
    pub pulse_bpm: u8,
    /// Breath pattern rate in breaths per minute
    pub breath_per_min: u8,
    /// [`CONFIG_VALID_MARKER`] when the record holds saved settings
    pub is_valid: u8,
}

/// Outcome of [`BacklightsConfig::normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStatus {
    /// Record was valid and in range
    Valid,
    /// Record was never written and has been reset to defaults
    Reset,
    /// Record was marked valid but some fields were out of range
    Repaired,
}

impl BacklightsConfig {
    /// Factory defaults, marked valid
    pub const fn new() -> Self {
        Self {
            pattern: DEFAULT_PATTERN as u8,
            intensity: DEFAULT_INTENSITY,
            color_phase: DEFAULT_COLOR_PHASE,
            pulse_bpm: DEFAULT_PULSE_BPM,
            breath_per_min: DEFAULT_BREATH_PER_MIN,
            is_valid: CONFIG_VALID_MARKER,
        }
    }

    /// Check the validity marker
    pub const fn is_valid(&self) -> bool {
        self.is_valid == CONFIG_VALID_MARKER
    }

    /// Bring the record back within its invariants
    ///
    /// A record without the validity marker is replaced by defaults.
    /// Otherwise out-of-range fields are wrapped (phase), clamped
    /// (intensity) or reset (pattern).
    pub fn normalize(&mut self) -> ConfigStatus {
        if !self.is_valid() {
            *self = Self::new();
            return ConfigStatus::Reset;
        }

        let mut status = ConfigStatus::Valid;
        if self.color_phase >= MAX_PHASE {
            self.color_phase %= MAX_PHASE;
            status = ConfigStatus::Repaired;
        }
        if self.intensity > MAX_INTENSITY {
            self.intensity = MAX_INTENSITY;
            status = ConfigStatus::Repaired;
        }
        if Pattern::from_raw(self.pattern).is_none() {
            self.pattern = DEFAULT_PATTERN as u8;
            status = ConfigStatus::Repaired;
        }

        status
    }
}

impl Default for BacklightsConfig {
    fn default() -> Self {
        Self::new()
    }
}
