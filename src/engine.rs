use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;
use crate::color::{BLACK, Rgb, offset_phase, phase_to_color, wrap_phase};
use crate::config::{BacklightsConfig, ConfigStatus, MAX_INTENSITY};
use crate::filter::{Filter, IntensityFilter};
use crate::layout::NUM_DIGITS;
use crate::pattern::{FrameParams, Pattern, PatternSlot};

/// Runtime flags, never persisted
#[derive(Debug, Clone, Copy)]
struct RuntimeState {
    /// Re-enter the pattern on the next frame
    needs_init: bool,
    powered_off: bool,
}

/// Backlight pattern engine
///
/// Borrows the settings record for its whole lifetime and renders one
/// frame per [`advance`](Self::advance) into the pixel sink. All mutators
/// write straight through to the record, which the storage layer can
/// read back with [`config`](Self::config) to persist it.
///
/// `N` is the number of addressable positions.
pub struct Backlights<'a, S: PixelSink, const N: usize = NUM_DIGITS> {
    // External dependencies and configuration
    sink: S,
    config: &'a mut BacklightsConfig,
    config_status: ConfigStatus,

    // Internal state
    state: RuntimeState,
    slot: PatternSlot,
    frame: [Rgb; N],

    // Internal dependencies
    intensity: IntensityFilter,
}

impl<'a, S: PixelSink, const N: usize> Backlights<'a, S, N> {
    /// Create an engine bound to `config`
    ///
    /// Equivalent to constructing the engine and calling
    /// [`begin`](Self::begin).
    pub fn new(sink: S, config: &'a mut BacklightsConfig) -> Self {
        let mut engine = Self {
            sink,
            config,
            config_status: ConfigStatus::Valid,
            state: RuntimeState {
                needs_init: true,
                powered_off: true,
            },
            slot: PatternSlot::default(),
            frame: [BLACK; N],
            intensity: IntensityFilter::new(0),
        };
        engine.bind();
        engine
    }

    /// Bind to a settings record
    ///
    /// A record that was never saved is reset to defaults, out-of-range
    /// fields are normalized. Powers the backlights on and re-enters the
    /// pattern on the next frame. Rebinding is allowed at any time.
    pub fn begin(&mut self, config: &'a mut BacklightsConfig) {
        self.config = config;
        self.bind();
    }

    fn bind(&mut self) {
        self.config_status = self.config.normalize();
        #[cfg(feature = "esp32-log")]
        if self.config_status != ConfigStatus::Valid {
            println!(
                "[Backlights.begin] stored config normalized: {:?}",
                self.config_status
            );
        }

        self.intensity.set_level(self.config.intensity);
        self.state.powered_off = false;
        self.state.needs_init = true;
    }

    /// Render one frame at the current time
    pub fn advance(&mut self) {
        self.advance_at(Instant::now());
    }

    /// Render one frame for `now` and push it to the sink
    pub fn advance_at(&mut self, now: Instant) {
        if self.state.powered_off {
            self.frame.fill(BLACK);
            self.flush();
            return;
        }

        if self.state.needs_init {
            self.slot = self.pattern().to_slot();
            self.slot.reset(now);
            self.state.needs_init = false;
        }

        let params = FrameParams::from(&*self.config);
        self.slot.render(now, &params, &mut self.frame);
        self.intensity.apply(&mut self.frame);

        self.flush();
    }

    fn flush(&mut self) {
        for (index, color) in self.frame.iter().enumerate() {
            self.sink.set_pixel_color(index, *color);
        }
        self.sink.show();
    }

    pub fn toggle_power(&mut self) {
        self.state.powered_off = !self.state.powered_off;
        self.state.needs_init = true;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Backlights.toggle_power] powered_off = {}",
            self.state.powered_off
        );
    }

    pub const fn is_powered_off(&self) -> bool {
        self.state.powered_off
    }

    /// Whether the next frame re-enters the pattern
    pub const fn needs_init(&self) -> bool {
        self.state.needs_init
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.config.pattern = pattern as u8;
        self.state.needs_init = true;
        #[cfg(feature = "esp32-log")]
        println!("[Backlights.set_pattern] {}", pattern.as_str());
    }

    /// Select a pattern by raw id
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a known pattern id.
    pub fn set_pattern_id(&mut self, id: u8) {
        match Pattern::from_raw(id) {
            Some(pattern) => self.set_pattern(pattern),
            None => panic!("pattern id {} out of range", id),
        }
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::from_raw(self.config.pattern).unwrap_or_else(|| {
            panic!(
                "bound config holds pattern id {} out of range",
                self.config.pattern
            )
        })
    }

    /// Display label of the active pattern
    pub fn pattern_label(&self) -> &'static str {
        self.pattern().label()
    }

    /// Move `step` patterns forward (negative steps move back), wrapping
    pub fn set_next_pattern(&mut self, step: i8) {
        self.set_pattern(self.pattern().offset(step));
    }

    pub fn set_prev_pattern(&mut self) {
        self.set_next_pattern(-1);
    }

    pub fn set_pulse_rate(&mut self, bpm: u8) {
        self.config.pulse_bpm = bpm;
    }

    pub fn pulse_rate(&self) -> u8 {
        self.config.pulse_bpm
    }

    pub fn set_breath_rate(&mut self, per_min: u8) {
        self.config.breath_per_min = per_min;
    }

    pub fn breath_rate(&self) -> u8 {
        self.config.breath_per_min
    }

    /// Set the base color phase, wrapped onto the ring
    pub fn set_color_phase(&mut self, phase: u16) {
        self.config.color_phase = wrap_phase(phase);
        self.state.needs_init = true;
    }

    /// Move the base color phase around the ring
    pub fn adjust_color_phase(&mut self, delta: i16) {
        let phase = offset_phase(self.config.color_phase, i32::from(delta));
        self.set_color_phase(phase);
    }

    pub fn color_phase(&self) -> u16 {
        self.config.color_phase
    }

    /// Base color for the configured phase, before intensity scaling
    pub fn color(&self) -> Rgb {
        phase_to_color(self.config.color_phase)
    }

    /// Set the intensity level, clamped to `0..=MAX_INTENSITY`
    pub fn set_intensity(&mut self, level: u8) {
        let level = level.min(MAX_INTENSITY);
        self.config.intensity = level;
        self.intensity.set_level(level);
        self.state.needs_init = true;
    }

    /// Change the intensity level, saturating at both ends
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn adjust_intensity(&mut self, delta: i16) {
        let level = i16::from(self.config.intensity)
            .saturating_add(delta)
            .clamp(0, i16::from(MAX_INTENSITY));
        self.set_intensity(level as u8);
    }

    pub fn intensity(&self) -> u8 {
        self.config.intensity
    }

    /// The bound settings record, for persisting
    pub fn config(&self) -> &BacklightsConfig {
        &*self.config
    }

    /// What `begin` had to do to the bound record
    pub const fn config_status(&self) -> ConfigStatus {
        self.config_status
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
