//! One simulation tick: accumulate, integrate, clamp.

use crate::float::Float;
use crate::forces::accumulate_forces;
use crate::grid::Grid;
use crate::integrator::Integrator;
use crate::observer::StepObserver;
use crate::spring::Material;

/// Per-tick switches consumed by [`step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOptions<F: Float> {
    pub method: Integrator,
    pub include_shear: bool,
    pub dt: F,
    /// Clamp to the bounds after Euler steps too. Verlet always clamps.
    pub clamp_after_euler: bool,
}

/// Advance `grid` by one tick in place.
///
/// Forces are rebuilt from scratch, the selected integrator consumes them,
/// then positions are clamped if the method's boundary policy asks for it.
pub fn step<F: Float, O: StepObserver>(
    grid: &mut Grid<F>,
    material: &Material<F>,
    options: &StepOptions<F>,
    observer: &mut O,
) {
    accumulate_forces(grid, material, options.include_shear);
    observer.on_forces_accumulated(grid.topology().edge_count(options.include_shear));

    options.method.integrate(grid, options.dt);
    observer.on_integrate(options.method);

    if options.method.clamps(options.clamp_after_euler) {
        let bounds = *grid.bounds();
        bounds.apply(grid.points_mut());
        observer.on_clamp();
    }

    observer.on_step_complete();
}
