mod support;

mod tests {
    use clock_backlights::config::{
        CONFIG_VALID_MARKER, DEFAULT_BREATH_PER_MIN, DEFAULT_INTENSITY, DEFAULT_PULSE_BPM,
    };
    use clock_backlights::pattern::TEST_MS_DELAY;
    use clock_backlights::{
        Backlights, BacklightsConfig, ConfigStatus, Digit, Instant, MAX_INTENSITY, MAX_PHASE,
        NUM_PATTERNS, Pattern, Rgb,
    };

    use super::support::{BLACK, GREEN, RED, RecordingSink};

    fn config_with(pattern: Pattern, color_phase: u16, intensity: u8) -> BacklightsConfig {
        BacklightsConfig {
            pattern: pattern as u8,
            color_phase,
            intensity,
            ..BacklightsConfig::new()
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_new_binds_and_powers_on() {
        let mut config = BacklightsConfig::new();
        let engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        assert!(!engine.is_powered_off());
        assert!(engine.needs_init());
        assert_eq!(engine.pattern(), Pattern::Rainbow);
        assert_eq!(engine.config_status(), ConfigStatus::Valid);
    }

    #[test]
    fn test_constant_writes_phase_color_everywhere() {
        let mut config = config_with(Pattern::Constant, 0, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.advance_at(at(0));

        assert!(!engine.needs_init());
        assert_eq!(engine.sink().pixels, [RED; 6]);
        assert_eq!(engine.sink().writes, 6);
        assert_eq!(engine.sink().shows, 1);
        assert_eq!(engine.frame(), &[RED; 6]);
    }

    #[test]
    fn test_intensity_scales_output() {
        let mut config = config_with(Pattern::Constant, 256, 6);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.advance_at(at(0));
        assert_eq!(engine.sink().pixels[0], Rgb::new(0, 127, 0));

        // 0xFF >> 7
        engine.set_intensity(0);
        engine.advance_at(at(10));
        assert_eq!(engine.sink().pixels[0], Rgb::new(0, 1, 0));

        engine.set_intensity(4);
        engine.advance_at(at(20));
        // 0xFF >> 3
        assert_eq!(engine.sink().pixels[0], Rgb::new(0, 31, 0));
    }

    #[test]
    fn test_dark_writes_off() {
        let mut config = config_with(Pattern::Dark, 100, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.advance_at(at(0));
        assert_eq!(engine.sink().pixels, [BLACK; 6]);
        assert_eq!(engine.sink().shows, 1);
    }

    #[test]
    fn test_powered_off_writes_off_and_keeps_init_pending() {
        let mut config = config_with(Pattern::Constant, 0, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);
        engine.advance_at(at(0));
        assert_eq!(engine.sink().pixels, [RED; 6]);

        engine.toggle_power();
        assert!(engine.is_powered_off());
        assert!(engine.needs_init());

        engine.advance_at(at(10));
        assert_eq!(engine.sink().pixels, [BLACK; 6]);
        assert_eq!(engine.sink().shows, 2);
        assert!(engine.needs_init());

        engine.toggle_power();
        assert!(!engine.is_powered_off());
        assert!(engine.needs_init());

        engine.advance_at(at(20));
        assert_eq!(engine.sink().pixels, [RED; 6]);
        assert!(!engine.needs_init());
    }

    #[test]
    fn test_power_off_keeps_settings() {
        let mut config = config_with(Pattern::Pulse, 300, 5);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.toggle_power();
        engine.advance_at(at(0));

        assert_eq!(engine.pattern(), Pattern::Pulse);
        assert_eq!(engine.color_phase(), 300);
        assert_eq!(engine.intensity(), 5);
    }

    #[test]
    fn test_pattern_cycle_wraps() {
        let mut config = config_with(Pattern::Breath, 0, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);
        engine.advance_at(at(0));

        engine.set_next_pattern(1);
        assert_eq!(engine.pattern(), Pattern::Dark);
        assert!(engine.needs_init());

        engine.set_prev_pattern();
        assert_eq!(engine.pattern(), Pattern::Breath);

        for _ in 0..NUM_PATTERNS {
            engine.set_next_pattern(1);
        }
        assert_eq!(engine.pattern(), Pattern::Breath);

        engine.set_next_pattern(-2);
        assert_eq!(engine.pattern(), Pattern::Rainbow);
        assert_eq!(engine.pattern_label(), "Rainbow");
    }

    #[test]
    fn test_set_pattern_by_id() {
        let mut config = BacklightsConfig::new();
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.set_pattern_id(2);
        assert_eq!(engine.pattern(), Pattern::Constant);
        assert_eq!(engine.config().pattern, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_pattern_id_rejects_unknown() {
        let mut config = BacklightsConfig::new();
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.set_pattern_id(NUM_PATTERNS as u8);
    }

    #[test]
    fn test_color_phase_stays_on_ring() {
        let mut config = BacklightsConfig::new();
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);
        engine.advance_at(at(0));

        engine.set_color_phase(1_000);
        assert_eq!(engine.color_phase(), 232);
        assert!(engine.needs_init());

        engine.set_color_phase(0);
        engine.adjust_color_phase(-1);
        assert_eq!(engine.color_phase(), 767);
        engine.adjust_color_phase(1);
        assert_eq!(engine.color_phase(), 0);

        for delta in [i16::MIN, -769, -16, 16, 500, 769, i16::MAX] {
            for _ in 0..10 {
                engine.adjust_color_phase(delta);
                assert!(engine.color_phase() < MAX_PHASE);
            }
        }
        for phase in [767, 768, 1_535, u16::MAX] {
            engine.set_color_phase(phase);
            assert!(engine.color_phase() < MAX_PHASE);
        }
    }

    #[test]
    fn test_color_ignores_pattern_and_intensity() {
        let mut config = config_with(Pattern::Dark, 256, 0);
        let engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        assert_eq!(engine.color(), GREEN);
    }

    #[test]
    fn test_intensity_saturates() {
        let mut config = BacklightsConfig::new();
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.adjust_intensity(-100);
        assert_eq!(engine.intensity(), 0);
        engine.adjust_intensity(-1);
        assert_eq!(engine.intensity(), 0);
        engine.adjust_intensity(i16::MIN);
        assert_eq!(engine.intensity(), 0);

        engine.adjust_intensity(3);
        assert_eq!(engine.intensity(), 3);

        engine.adjust_intensity(100);
        assert_eq!(engine.intensity(), MAX_INTENSITY);
        engine.adjust_intensity(i16::MAX);
        assert_eq!(engine.intensity(), MAX_INTENSITY);

        engine.set_intensity(200);
        assert_eq!(engine.intensity(), MAX_INTENSITY);
    }

    #[test]
    fn test_test_pattern_walks_positions() {
        let mut config = config_with(Pattern::Dark, 0, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);
        engine.advance_at(at(0));

        engine.set_pattern(Pattern::Test);
        let start = 5_000;
        let delay = TEST_MS_DELAY.as_millis();
        for step in 0..14 {
            engine.advance_at(at(start + step * delay));
            assert_eq!(engine.sink().lit(), vec![(step % 6) as usize]);
        }
        assert_eq!(
            engine.sink().pixels[Digit::SecondsOnes.index()],
            BLACK,
            "walk moved past the first digit"
        );
    }

    #[test]
    fn test_pattern_change_restarts_timers() {
        let mut config = config_with(Pattern::Test, 0, 7);
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.advance_at(at(0));
        engine.advance_at(at(3 * TEST_MS_DELAY.as_millis()));
        assert_eq!(engine.sink().lit(), vec![3]);

        engine.set_pattern(Pattern::Test);
        engine.advance_at(at(10_000));
        assert_eq!(engine.sink().lit(), vec![Digit::SecondsOnes.index()]);
    }

    #[test]
    fn test_rate_change_applies_without_reinit() {
        let mut config = config_with(Pattern::Pulse, 0, 7);
        config.pulse_bpm = 60;
        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        engine.advance_at(at(1_000));
        engine.advance_at(at(1_250));
        assert_eq!(engine.sink().pixels[0], Rgb::new(192, 0, 0));

        engine.set_pulse_rate(120);
        assert!(!engine.needs_init());
        assert_eq!(engine.pulse_rate(), 120);

        engine.advance_at(at(1_250));
        assert_eq!(engine.sink().pixels[0], Rgb::new(127, 0, 0));

        engine.set_breath_rate(4);
        assert!(!engine.needs_init());
        assert_eq!(engine.breath_rate(), 4);
    }

    #[test]
    fn test_mutations_reach_config() {
        let mut config = BacklightsConfig::new();
        {
            let mut engine: Backlights<'_, _> =
                Backlights::new(RecordingSink::new(), &mut config);
            engine.set_pattern(Pattern::Pulse);
            engine.set_color_phase(500);
            engine.set_intensity(2);
            engine.set_pulse_rate(90);
            engine.set_breath_rate(12);
        }

        assert_eq!(config.pattern, Pattern::Pulse as u8);
        assert_eq!(config.color_phase, 500);
        assert_eq!(config.intensity, 2);
        assert_eq!(config.pulse_bpm, 90);
        assert_eq!(config.breath_per_min, 12);
        assert_eq!(config.is_valid, CONFIG_VALID_MARKER);
    }

    #[test]
    fn test_begin_resets_unsaved_config() {
        let mut config = BacklightsConfig {
            pattern: 0,
            intensity: 0,
            color_phase: 0,
            pulse_bpm: 0,
            breath_per_min: 0,
            is_valid: 0xFF,
        };
        let engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut config);

        assert_eq!(engine.config_status(), ConfigStatus::Reset);
        assert_eq!(engine.pattern(), Pattern::Rainbow);
        assert_eq!(engine.intensity(), DEFAULT_INTENSITY);
        assert_eq!(engine.pulse_rate(), DEFAULT_PULSE_BPM);
        assert_eq!(engine.breath_rate(), DEFAULT_BREATH_PER_MIN);
        assert!(engine.config().is_valid());
    }

    #[test]
    fn test_begin_rebinds() {
        let mut first = config_with(Pattern::Constant, 0, 7);
        let mut second = config_with(Pattern::Constant, 512, 7);
        second.intensity = 12;

        let mut engine: Backlights<'_, _> = Backlights::new(RecordingSink::new(), &mut first);
        engine.advance_at(at(0));
        assert_eq!(engine.sink().pixels[0], RED);

        engine.toggle_power();
        engine.begin(&mut second);
        assert!(!engine.is_powered_off());
        assert!(engine.needs_init());
        assert_eq!(engine.config_status(), ConfigStatus::Repaired);
        assert_eq!(engine.intensity(), MAX_INTENSITY);

        engine.advance_at(at(10));
        assert_eq!(engine.sink().pixels[0], Rgb::new(0, 0, 255));
    }
}
