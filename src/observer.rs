//! Step observer trait for monitoring simulation progress.

use crate::integrator::Integrator;

/// Hooks called at each stage of a simulation step.
///
/// Implement this to collect timings, counters or debug output. Every
/// method has a no-op default.
pub trait StepObserver {
    /// Called after forces were rebuilt from `edge_count` springs.
    fn on_forces_accumulated(&mut self, _edge_count: usize) {}

    /// Called after every point was advanced by `method`.
    fn on_integrate(&mut self, _method: Integrator) {}

    /// Called after positions were clamped to the bounds.
    fn on_clamp(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// Observer that ignores every hook.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
