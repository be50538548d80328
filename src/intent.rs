//! Control intents
//!
//! Input code (button handlers, menus, interrupts) posts intents into a
//! bounded queue instead of calling the engine directly. The frame loop
//! drains the queue before rendering, so every mutation still happens in
//! the engine's own context between two frames.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::PixelSink;
use crate::engine::Backlights;
use crate::pattern::Pattern;

/// Default queue capacity
pub const DEFAULT_INTENT_QUEUE_SIZE: usize = 8;

/// Color phase step used by menu controls
pub const COLOR_PHASE_STEP: i16 = 16;

/// A control request for the backlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightsIntent {
    TogglePower,
    SetPattern(Pattern),
    NextPattern,
    PrevPattern,
    SetColorPhase(u16),
    AdjustColorPhase(i16),
    SetIntensity(u8),
    AdjustIntensity(i16),
    SetPulseRate(u8),
    SetBreathRate(u8),
}

impl BacklightsIntent {
    /// Apply the intent to an engine
    pub fn apply<S: PixelSink, const N: usize>(self, engine: &mut Backlights<'_, S, N>) {
        match self {
            Self::TogglePower => engine.toggle_power(),
            Self::SetPattern(pattern) => engine.set_pattern(pattern),
            Self::NextPattern => engine.set_next_pattern(1),
            Self::PrevPattern => engine.set_prev_pattern(),
            Self::SetColorPhase(phase) => engine.set_color_phase(phase),
            Self::AdjustColorPhase(delta) => engine.adjust_color_phase(delta),
            Self::SetIntensity(level) => engine.set_intensity(level),
            Self::AdjustIntensity(delta) => engine.adjust_intensity(delta),
            Self::SetPulseRate(bpm) => engine.set_pulse_rate(bpm),
            Self::SetBreathRate(per_min) => engine.set_breath_rate(per_min),
        }
    }
}

/// Error returned when the queue has no room left; carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull<T>(pub T);

/// Bounded intent queue, safe to share with interrupt handlers
///
/// Backed by a fixed-size `heapless::Deque` behind a critical section,
/// so it can live in a `static`.
pub struct IntentQueue<const SIZE: usize = DEFAULT_INTENT_QUEUE_SIZE> {
    inner: Mutex<RefCell<Deque<BacklightsIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for input code
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { queue: self }
    }

    /// Handle for the frame loop
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { queue: self }
    }

    /// Queue an intent
    ///
    /// Returns `Err(QueueFull(intent))` if the queue is full.
    pub fn try_send(&self, intent: BacklightsIntent) -> Result<(), QueueFull<BacklightsIntent>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(QueueFull)
        })
    }

    /// Take the oldest queued intent
    pub fn try_receive(&self) -> Option<BacklightsIntent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued intents
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: BacklightsIntent) -> Result<(), QueueFull<BacklightsIntent>> {
        self.queue.try_send(intent)
    }
}

/// Receiving half of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<BacklightsIntent> {
        self.queue.try_receive()
    }

    /// Apply every queued intent in arrival order
    ///
    /// Returns the number of intents applied.
    pub fn apply_pending<S: PixelSink, const N: usize>(
        &self,
        engine: &mut Backlights<'_, S, N>,
    ) -> usize {
        let mut applied = 0;
        while let Some(intent) = self.try_receive() {
            intent.apply(engine);
            applied += 1;
        }
        applied
    }
}
