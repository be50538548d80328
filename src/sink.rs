//! Pixel sink implementations
//!
//! [`BufferedSink`] collects per-position writes and hands the whole
//! frame to an [`OutputDriver`] on `show`. [`SmartLedsDriver`] adapts any
//! `smart-leds` writer (WS2812 over RMT, SPI, PIO, ...) to that trait.

use core::fmt::Debug;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::color::{BLACK, Rgb};
use crate::{OutputDriver, PixelSink};

/// Frame buffer in front of an output driver
#[derive(Debug)]
pub struct BufferedSink<D: OutputDriver, const N: usize> {
    driver: D,
    buffer: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> BufferedSink<D, N> {
    /// Create a sink with every pixel off
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            buffer: [BLACK; N],
        }
    }

    /// Pixels as they will be pushed on the next `show`
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.buffer
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelSink for BufferedSink<D, N> {
    /// # Panics
    ///
    /// Panics if `index` is not below `N`.
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        assert!(index < N, "pixel index {} out of range", index);
        self.buffer[index] = color;
    }

    fn show(&mut self) {
        self.driver.write(&self.buffer);
    }
}

/// Output driver over a `smart-leds` writer
///
/// Write errors stay with the hardware layer: they are logged and the
/// frame is dropped.
#[derive(Debug)]
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn inner(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    #[allow(clippy::used_underscore_binding)]
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(_err) = self.writer.write(colors.iter().copied()) {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsDriver.write] dropping frame: {:?}", _err);
        }
    }
}
