#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod filter;
pub mod frame_scheduler;
pub mod intent;
pub mod layout;
pub mod math8;
pub mod pattern;
pub mod sink;

pub use config::{BacklightsConfig, ConfigStatus, MAX_INTENSITY};
pub use engine::Backlights;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent::{BacklightsIntent, IntentQueue, IntentReceiver, IntentSender, QueueFull};
pub use layout::{Digit, NUM_DIGITS};
pub use pattern::{NUM_PATTERNS, PATTERN_LABELS, Pattern};
pub use sink::{BufferedSink, SmartLedsDriver};

pub use color::{MAX_PHASE, Rgb};
pub use embassy_time::{Duration, Instant};

/// Per-position color output
///
/// The engine writes one color for every position, then calls `show` to
/// commit the frame. Indices are the physical pixel order of the strip.
pub trait PixelSink {
    /// Set the color of a single position
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Push the pending colors to the hardware
    fn show(&mut self);
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`BufferedSink`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
