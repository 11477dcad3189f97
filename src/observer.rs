//! Step observer trait for monitoring each simulated frame.

/// Trait for observing cloth frame updates.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass, once anchors have been re-pinned.
    /// `skipped` counts constraints left alone because their endpoints
    /// coincided.
    fn on_relax_pass(&mut self, _pass: usize, _skipped: usize) {}

    /// Called when a frame update is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards frame phases to `tracing` at trace level.
#[derive(Debug, Default)]
pub struct TracingStepObserver {
    frame: u64,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl StepObserver for TracingStepObserver {
    fn on_integrate(&mut self) {
        tracing::trace!(frame = self.frame, "integrated");
    }

    fn on_relax_pass(&mut self, pass: usize, skipped: usize) {
        tracing::trace!(frame = self.frame, pass, skipped, "relaxation pass");
    }

    fn on_step_complete(&mut self) {
        tracing::trace!(frame = self.frame, "frame complete");
        self.frame += 1;
    }
}
