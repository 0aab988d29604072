//! Linear spring-damper force model between two mass points.

use crate::error::SimulationError;
use crate::float::Float;
use crate::point::MassPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constants of one spring class.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringParams<F: Float> {
    /// Length at which the spring exerts no force.
    pub rest_length: F,
    /// Hooke constant `k`.
    pub stiffness: F,
    /// Linear damper coefficient along the spring axis.
    pub damping: F,
}

impl<F: Float> SpringParams<F> {
    pub fn new(rest_length: F, stiffness: F, damping: F) -> Self {
        SpringParams { rest_length, stiffness, damping }
    }

    fn is_valid(&self) -> bool {
        [self.rest_length, self.stiffness, self.damping]
            .into_iter()
            .all(|v| v.is_finite() && v >= F::zero())
    }

    /// Elastic energy stored at the given length, `k (l - l0)^2 / 2`.
    pub fn potential_energy(&self, length: F) -> F {
        let stretch = length - self.rest_length;
        F::half() * self.stiffness * stretch * stretch
    }
}

/// Spring constants and point mass for a whole grid.
///
/// Fixed for the lifetime of a simulation; rebuild the simulation to change them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material<F: Float> {
    /// Mass shared by every point.
    pub mass: F,
    /// Axis-aligned neighbours.
    pub structural: SpringParams<F>,
    /// Diagonal neighbours inside a 2x2 block.
    pub shear: SpringParams<F>,
}

impl<F: Float> Material<F> {
    /// Build a material whose shear rest length is `structural_rest * sqrt(2)`.
    pub fn new(
        mass: F,
        structural_rest: F,
        structural_stiffness: F,
        structural_damping: F,
        shear_stiffness: F,
        shear_damping: F,
    ) -> Self {
        let diag_length = (structural_rest * structural_rest + structural_rest * structural_rest).sqrt();
        Material {
            mass,
            structural: SpringParams::new(structural_rest, structural_stiffness, structural_damping),
            shear: SpringParams::new(diag_length, shear_stiffness, shear_damping),
        }
    }
}

impl<F: Float> Material<F> {
    /// Reject constants that would turn the first step into NaN.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let mass_ok = self.mass.is_finite() && self.mass > F::zero();
        if mass_ok && self.structural.is_valid() && self.shear.is_valid() {
            Ok(())
        } else {
            Err(SimulationError::InvalidMaterial)
        }
    }
}

impl<F: Float> Default for Material<F> {
    fn default() -> Self {
        Material::new(
            F::from_f32(0.2),
            F::from_f32(50.0),
            F::from_f32(20.0),
            F::from_f32(0.1),
            F::from_f32(10.0),
            F::from_f32(0.05),
        )
    }
}

/// Accumulate the spring-damper force between points `a` and `b`.
///
/// The scalar force along the unit axis `u = (pos_b - pos_a) / dist` is
/// `k (dist - l0) + c ((vel_b - vel_a) . u)`, positive when the pair should
/// be pulled together. It is divided by `mass`, then added to `a` along `u`
/// and to `b` along `-u`. Coincident points contribute nothing.
///
/// # Panics
///
/// Panics if `a` or `b` is not a valid index into `points`.
pub fn apply_spring<F: Float>(
    points: &mut [MassPoint<F>],
    a: usize,
    b: usize,
    params: &SpringParams<F>,
    mass: F,
) {
    let delta = points[b].pos - points[a].pos;
    let dist = delta.length();
    if dist == F::zero() {
        return; // degenerate
    }

    let dir = delta.scale(F::one() / dist);
    let spring_force = params.stiffness * (dist - params.rest_length);
    let damping_force = params.damping * (points[b].vel - points[a].vel).dot(dir);

    // Positive means "pull together": a moves along +dir, b along -dir.
    let accel = dir.scale((spring_force + damping_force) / mass);
    points[a].apply_acceleration(accel);
    points[b].apply_acceleration(-accel);
}
