//! Rectangular lattice of mass points and its implicit spring topology.

use crate::bounds::Bounds;
use crate::error::SimulationError;
use crate::float::Float;
use crate::point::MassPoint;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which spring class an edge belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgeKind {
    /// Horizontal or vertical neighbours.
    Structural,
    /// Diagonal neighbours inside a 2x2 block.
    Shear,
}

/// A spring between two point indices (row-major).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(a: usize, b: usize, kind: EdgeKind) -> Self {
        Edge { a, b, kind }
    }
}

/// Grid dimensions; enumerates springs without borrowing the point storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    pub rows: usize,
    pub cols: usize,
}

impl Topology {
    /// Right and down neighbour of every point that has one, in row-major order.
    pub fn structural_edges(self) -> impl Iterator<Item = Edge> {
        let Topology { rows, cols } = self;
        (0..rows).flat_map(move |row| {
            (0..cols).flat_map(move |col| {
                let idx = row * cols + col;
                let right = (col + 1 < cols).then(|| Edge::new(idx, idx + 1, EdgeKind::Structural));
                let down = (row + 1 < rows).then(|| Edge::new(idx, idx + cols, EdgeKind::Structural));
                right.into_iter().chain(down)
            })
        })
    }

    /// Both diagonals of every 2x2 block: top-left to bottom-right, then
    /// bottom-left to top-right.
    pub fn shear_edges(self) -> impl Iterator<Item = Edge> {
        let Topology { rows, cols } = self;
        (0..rows.saturating_sub(1)).flat_map(move |row| {
            (0..cols.saturating_sub(1)).flat_map(move |col| {
                let tl = row * cols + col;
                let tr = tl + 1;
                let bl = tl + cols;
                let br = bl + 1;
                [Edge::new(tl, br, EdgeKind::Shear), Edge::new(bl, tr, EdgeKind::Shear)]
            })
        })
    }

    /// Every spring the force accumulator applies.
    pub fn edges(self, include_shear: bool) -> impl Iterator<Item = Edge> {
        self.structural_edges()
            .chain(self.shear_edges().take_while(move |_| include_shear))
    }

    pub fn structural_count(self) -> usize {
        self.rows * self.cols.saturating_sub(1) + self.rows.saturating_sub(1) * self.cols
    }

    pub fn shear_count(self) -> usize {
        2 * self.rows.saturating_sub(1) * self.cols.saturating_sub(1)
    }

    pub fn edge_count(self, include_shear: bool) -> usize {
        let shear = if include_shear { self.shear_count() } else { 0 };
        self.structural_count() + shear
    }
}

/// A `rows x cols` lattice of mass points laid out inside padded bounds.
///
/// Point at (row, col) has index `row * cols + col`.
#[derive(Clone, Debug)]
pub struct Grid<F: Float> {
    points: AllocVec<MassPoint<F>>,
    rows: usize,
    cols: usize,
    bounds: Bounds<F>,
}

impl<F: Float> Grid<F> {
    /// Lay out an evenly spaced lattice.
    ///
    /// Columns span `[padding, width - padding]`; rows are spaced the same way
    /// and the lattice is centred vertically. A single row or column has a
    /// step of zero. Every point starts at rest.
    ///
    /// Dimensions whose point storage cannot be allocated are rejected as
    /// invalid rather than aborting.
    pub fn new(rows: usize, cols: usize, bounds: Bounds<F>) -> Result<Self, SimulationError> {
        let invalid = SimulationError::InvalidGridDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let count = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;
        validate_bounds(&bounds)?;

        let mut points = AllocVec::new();
        points.try_reserve_exact(count).map_err(|_| invalid)?;

        let Bounds { width, height, padding } = bounds;
        let step = |extent: F, count: usize| {
            if count > 1 {
                (extent - F::two() * padding) / F::from_f32((count - 1) as f32)
            } else {
                F::zero()
            }
        };
        let h_step = step(width, cols);
        let v_step = step(height, rows);
        let start_y = (height - v_step * F::from_f32((rows - 1) as f32)) * F::half();

        for row in 0..rows {
            for col in 0..cols {
                let x = padding + F::from_f32(col as f32) * h_step;
                let y = start_y + F::from_f32(row as f32) * v_step;
                points.push(MassPoint::at_rest(Vec2::new(x, y)));
            }
        }

        Ok(Grid { points, rows, cols, bounds })
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Index of (row, col), or an error if it lies outside the grid.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, SimulationError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(SimulationError::PointOutOfBounds { row, col, rows: self.rows, cols: self.cols })
        }
    }

    pub fn point(&self, row: usize, col: usize) -> Option<&MassPoint<F>> {
        self.checked_index(row, col).ok().map(|idx| &self.points[idx])
    }

    pub fn position_at(&self, row: usize, col: usize) -> Option<Vec2<F>> {
        self.point(row, col).map(|p| p.pos)
    }

    /// Shift one point (and its Verlet history) by `offset`.
    ///
    /// Used for the one-off preset disturbance; the result is not clamped.
    pub fn displace(&mut self, row: usize, col: usize, offset: Vec2<F>) -> Result<(), SimulationError> {
        let idx = self.checked_index(row, col)?;
        let p = &mut self.points[idx];
        p.pos += offset;
        p.prev_pos += offset;
        Ok(())
    }

    /// Overwrite a point's position from external input (drag).
    ///
    /// The position is clamped to the padded bounds and the previous
    /// position is set to the same value.
    pub fn set_point_position(
        &mut self,
        row: usize,
        col: usize,
        pos: Vec2<F>,
    ) -> Result<(), SimulationError> {
        if !pos.is_finite() {
            return Err(SimulationError::NonFinitePosition);
        }
        let idx = self.checked_index(row, col)?;
        let clamped = self.bounds.clamp(pos);
        self.points[idx].move_to(clamped);
        Ok(())
    }

    pub fn clear_forces(&mut self) {
        for p in self.points.iter_mut() {
            p.clear_force();
        }
    }

    pub fn topology(&self) -> Topology {
        Topology { rows: self.rows, cols: self.cols }
    }

    /// Springs for rendering, structural first.
    pub fn edges(&self, include_shear: bool) -> AllocVec<Edge> {
        self.topology().edges(include_shear).collect()
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Flat `[x0, y0, x1, y1, ...]` in row-major order.
    pub fn positions_flat(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    pub fn kinetic_energy(&self, mass: F) -> F {
        self.points.iter().fold(F::zero(), |acc, p| acc + p.kinetic_energy(mass))
    }

    pub fn points(&self) -> &[MassPoint<F>] { &self.points }
    pub fn points_mut(&mut self) -> &mut [MassPoint<F>] { &mut self.points }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn bounds(&self) -> &Bounds<F> { &self.bounds }
    pub fn point_count(&self) -> usize { self.points.len() }
}

fn validate_bounds<F: Float>(bounds: &Bounds<F>) -> Result<(), SimulationError> {
    let Bounds { width, height, padding } = *bounds;
    if !(width.is_finite() && height.is_finite()) || width <= F::zero() || height <= F::zero() {
        return Err(SimulationError::InvalidDrawArea);
    }
    if !padding.is_finite() || padding < F::zero() || F::two() * padding > width.min(height) {
        return Err(SimulationError::InvalidPadding);
    }
    Ok(())
}
