use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A scale of 255 leaves the value untouched.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Ease in out quadratic
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Position (0..`ring`) of `elapsed` within a repeating `period`
///
/// Returns 0 for a zero-length period.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
#[inline]
pub const fn ring_progress(elapsed: Duration, period: Duration, ring: u16) -> u16 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0;
    }
    let within = elapsed.as_millis() % period_ms;

    ((within * ring as u64) / period_ms) as u16
}
