//! Digit positions on the clock
//!
//! The backlight string is wired in the same order as the digits, so a
//! digit's position is also its pixel index.

/// Number of digits (and backlight pixels) on the clock
pub const NUM_DIGITS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Digit {
    SecondsOnes = 0,
    SecondsTens = 1,
    MinutesOnes = 2,
    MinutesTens = 3,
    HoursOnes = 4,
    HoursTens = 5,
}

impl Digit {
    /// Digits in pixel order
    pub const ALL: [Self; NUM_DIGITS] = [
        Self::SecondsOnes,
        Self::SecondsTens,
        Self::MinutesOnes,
        Self::MinutesTens,
        Self::HoursOnes,
        Self::HoursTens,
    ];

    /// Pixel index of the digit
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Digit> for usize {
    fn from(digit: Digit) -> Self {
        digit.index()
    }
}
