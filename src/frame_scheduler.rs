//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::PixelSink;
use crate::engine::Backlights;
use crate::intent::IntentReceiver;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Number of control intents applied before this frame.
    pub intents_applied: usize,
}

/// Drives a [`Backlights`] engine at a steady frame rate.
///
/// Each tick drains pending control intents, renders one frame and
/// reports how long the caller should sleep.
///
/// # Usage
///
/// ```ignore
/// static INTENTS: IntentQueue = IntentQueue::new();
///
/// let engine = Backlights::new(sink, &mut config);
/// let mut scheduler = FrameScheduler::new(engine, INTENTS.receiver());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, 'q, S: PixelSink, const N: usize, const QUEUE_SIZE: usize> {
    engine: Backlights<'a, S, N>,
    intents: IntentReceiver<'q, QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, 'q, S: PixelSink, const N: usize, const QUEUE_SIZE: usize>
    FrameScheduler<'a, 'q, S, N, QUEUE_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(engine: Backlights<'a, S, N>, intents: IntentReceiver<'q, QUEUE_SIZE>) -> Self {
        Self::with_frame_duration(engine, intents, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: Backlights<'a, S, N>,
        intents: IntentReceiver<'q, QUEUE_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            engine,
            intents,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// If we have fallen more than two frames behind, the schedule restarts
    /// from `now` instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let intents_applied = self.intents.apply_pending(&mut self.engine);
        self.engine.advance_at(now);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            intents_applied,
        }
    }

    pub fn engine(&self) -> &Backlights<'a, S, N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Backlights<'a, S, N> {
        &mut self.engine
    }

    pub fn into_engine(self) -> Backlights<'a, S, N> {
        self.engine
    }
}
