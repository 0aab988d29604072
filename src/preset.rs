//! Named scenarios: grid size, shear springs and the initial disturbance.

use crate::error::SimulationError;
use crate::float::Float;
use crate::grid::Grid;
use crate::vec::Vec2;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal shift applied to the last point of the first row.
pub const PULL_OFFSET: f32 = 20.0;
/// Vertical lift applied to the centre point (negative is up on screen).
pub const LIFT_OFFSET: f32 = -40.0;

/// A preset ("task") fixing topology and initial disturbance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preset {
    /// Task 1: two points, one spring, pulled apart horizontally.
    #[default]
    SingleSpring,
    /// Task 2: a row of five points, last one pulled horizontally.
    Chain,
    /// Task 3: 3x3 structural mesh, centre lifted.
    Membrane,
    /// Task 4: 3x3 mesh with shear springs, centre lifted.
    Cloth,
    /// Caller-chosen dimensions and shear, no disturbance.
    FreeForm,
}

/// One point offset applied right after the grid is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disturbance<F: Float> {
    pub row: usize,
    pub col: usize,
    pub offset: Vec2<F>,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::SingleSpring,
        Preset::Chain,
        Preset::Membrane,
        Preset::Cloth,
        Preset::FreeForm,
    ];

    /// Task number as shown in the UI; free-form is 0.
    pub fn id(self) -> u8 {
        match self {
            Preset::FreeForm => 0,
            Preset::SingleSpring => 1,
            Preset::Chain => 2,
            Preset::Membrane => 3,
            Preset::Cloth => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Fixed `(rows, cols)`, or `None` when the caller picks them.
    pub fn dimensions(self) -> Option<(usize, usize)> {
        match self {
            Preset::SingleSpring => Some((1, 2)),
            Preset::Chain => Some((1, 5)),
            Preset::Membrane | Preset::Cloth => Some((3, 3)),
            Preset::FreeForm => None,
        }
    }

    /// Whether the preset turns shear springs on. Free-form leaves it to the caller.
    pub fn shear(self) -> Option<bool> {
        match self {
            Preset::SingleSpring | Preset::Chain | Preset::Membrane => Some(false),
            Preset::Cloth => Some(true),
            Preset::FreeForm => None,
        }
    }

    /// Where and by how much the preset nudges a freshly built grid.
    ///
    /// `None` for free-form and for an empty grid.
    pub fn disturbance<F: Float>(self, rows: usize, cols: usize) -> Option<Disturbance<F>> {
        if rows == 0 || cols == 0 {
            return None;
        }
        match self {
            Preset::SingleSpring | Preset::Chain => Some(Disturbance {
                row: 0,
                col: cols - 1,
                offset: Vec2::new(F::from_f32(PULL_OFFSET), F::zero()),
            }),
            Preset::Membrane | Preset::Cloth => Some(Disturbance {
                row: rows / 2,
                col: cols / 2,
                offset: Vec2::new(F::zero(), F::from_f32(LIFT_OFFSET)),
            }),
            Preset::FreeForm => None,
        }
    }

    /// Apply this preset's one-off disturbance to a freshly built grid.
    pub fn apply_disturbance<F: Float>(self, grid: &mut Grid<F>) -> Result<(), SimulationError> {
        match self.disturbance(grid.rows(), grid.cols()) {
            Some(d) => grid.displace(d.row, d.col, d.offset),
            None => Ok(()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::SingleSpring => "single spring",
            Preset::Chain => "chain",
            Preset::Membrane => "membrane",
            Preset::Cloth => "cloth",
            Preset::FreeForm => "free-form",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {} ({})", self.id(), self.name())
    }
}
