//! Time-stepping schemes sharing one point state.

use crate::float::Float;
use crate::grid::Grid;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integration method, chosen per tick.
///
/// Both methods read and write the same `MassPoint` fields, so switching
/// between ticks is well defined. Euler never advances `prev_pos`; a Verlet
/// step right after an Euler run therefore sees a stale history.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Integrator {
    /// `v += a h; x += v h`.
    #[default]
    SemiImplicitEuler,
    /// `x' = 2x - px + a h^2`, velocity-free.
    Verlet,
}

impl Integrator {
    /// Advance every point by `dt` using the forces already accumulated.
    pub fn integrate<F: Float>(self, grid: &mut Grid<F>, dt: F) {
        let points = grid.points_mut();
        match self {
            Integrator::SemiImplicitEuler => {
                for p in points.iter_mut() {
                    p.integrate_euler(dt);
                }
            }
            Integrator::Verlet => {
                for p in points.iter_mut() {
                    p.integrate_verlet(dt);
                }
            }
        }
    }

    /// Whether positions are clamped to the bounds after this method's step.
    ///
    /// Verlet always clamps. Euler only clamps when `clamp_after_euler` is set.
    pub fn clamps(self, clamp_after_euler: bool) -> bool {
        match self {
            Integrator::SemiImplicitEuler => clamp_after_euler,
            Integrator::Verlet => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Integrator::SemiImplicitEuler => "semi-implicit euler",
            Integrator::Verlet => "verlet",
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
