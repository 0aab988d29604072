//! Point masses: the per-node state shared by both integrators.

use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single mass point of the grid.
///
/// `force` is stored already divided by mass, i.e. in acceleration units.
/// `prev_pos` is only read by the Verlet integrator but is kept valid for
/// every point so the integration method can switch between ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MassPoint<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
}

impl<F: Float> MassPoint<F> {
    /// A point at rest: zero velocity and force, previous position equal to `pos`.
    pub fn at_rest(pos: Vec2<F>) -> Self {
        MassPoint {
            pos,
            vel: Vec2::zero(),
            prev_pos: pos,
            force: Vec2::zero(),
        }
    }

    /// Accumulate a force-over-mass contribution.
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        self.force += accel;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::zero();
    }

    /// Overwrite the position and forget the Verlet history.
    ///
    /// The velocity is left untouched; only the implicit Verlet velocity
    /// `pos - prev_pos` is cleared.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Semi-implicit Euler: velocity first, then position from the new velocity.
    pub fn integrate_euler(&mut self, dt: F) {
        self.vel += self.force.scale(dt);
        self.pos += self.vel.scale(dt);
    }

    /// Velocity-free Störmer–Verlet.
    ///
    /// `vel` is refreshed with a central-difference estimate for display
    /// only; the recurrence never reads it.
    pub fn integrate_verlet(&mut self, dt: F) {
        let new_pos = self.pos.scale(F::two()) - self.prev_pos + self.force.scale(dt * dt);
        self.vel = (new_pos - self.prev_pos).scale(F::one() / (F::two() * dt));
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    pub fn kinetic_energy(&self, mass: F) -> F {
        F::half() * mass * self.vel.length_sq()
    }
}
