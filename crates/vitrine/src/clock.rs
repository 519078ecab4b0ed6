//! The frame clock owned by the host loop.

use std::time::Instant;

/// Monotonic elapsed-time source for the animation layer.
///
/// The clock is the only shared input the animators consume; they read
/// the elapsed seconds passed into their update functions and never
/// touch the clock itself.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    /// Start the clock at the current instant.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
