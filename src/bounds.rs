//! Padded drawing rectangle that positions are clamped into.

use crate::float::Float;
use crate::point::MassPoint;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangle `[padding, width - padding] x [padding, height - padding]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
    pub padding: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F, padding: F) -> Self {
        Bounds { width, height, padding }
    }

    pub fn min(&self) -> Vec2<F> {
        Vec2::new(self.padding, self.padding)
    }

    pub fn max(&self) -> Vec2<F> {
        Vec2::new(self.width - self.padding, self.height - self.padding)
    }

    /// Clamp each coordinate independently.
    pub fn clamp(&self, pos: Vec2<F>) -> Vec2<F> {
        let (lo, hi) = (self.min(), self.max());
        Vec2::new(pos.x.clamp(lo.x, hi.x), pos.y.clamp(lo.y, hi.y))
    }

    pub fn contains(&self, pos: Vec2<F>) -> bool {
        let (lo, hi) = (self.min(), self.max());
        pos.x >= lo.x && pos.x <= hi.x && pos.y >= lo.y && pos.y <= hi.y
    }

    /// Clamp the positions of every point in place.
    ///
    /// Only `pos` is touched: the Verlet history and velocity keep whatever
    /// the integrator left there.
    pub fn apply(&self, points: &mut [MassPoint<F>]) {
        for p in points.iter_mut() {
            p.pos = self.clamp(p.pos);
        }
    }
}

/// Clamp one point into the padded rectangle of a `width` x `height` area.
pub fn clamp<F: Float>(point: &mut MassPoint<F>, padding: F, width: F, height: F) {
    point.pos = Bounds::new(width, height, padding).clamp(point.pos);
}
