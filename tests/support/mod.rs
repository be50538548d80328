#![allow(dead_code)]

use clock_backlights::{NUM_DIGITS, OutputDriver, PixelSink, Rgb};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pixel sink that remembers every write
#[derive(Debug)]
pub struct RecordingSink {
    pub pixels: [Rgb; NUM_DIGITS],
    pub writes: usize,
    pub shows: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb { r: 1, g: 2, b: 3 }; NUM_DIGITS],
            writes: 0,
            shows: 0,
        }
    }

    pub fn lit(&self) -> Vec<usize> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != BLACK)
            .map(|(index, _)| index)
            .collect()
    }
}

impl PixelSink for RecordingSink {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.pixels[index] = color;
        self.writes += 1;
    }

    fn show(&mut self) {
        self.shows += 1;
    }
}

/// Output driver that keeps the frames it was given
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for FrameLog {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}
