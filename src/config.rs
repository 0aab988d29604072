//! Configuration for building and stepping a simulation.

use crate::bounds::Bounds;
use crate::error::SimulationError;
use crate::float::Float;
use crate::integrator::Integrator;
use crate::preset::Preset;
use crate::spring::Material;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed time step: one frame at roughly 60 steps per second.
pub const DEFAULT_DT: f32 = 0.016;

/// Everything the engine consumes from its host.
///
/// # Builder Pattern
/// ```
/// use springgrid::{Integrator, Preset, SimulationConfig};
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_preset(Preset::Cloth)
///     .with_area(640.0, 480.0, 30.0)
///     .with_method(Integrator::Verlet);
/// assert_eq!((config.rows, config.cols), (3, 3));
/// assert!(config.shear_enabled);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Active task. Fixed presets override `rows`, `cols` and `shear_enabled`.
    pub preset: Preset,
    pub rows: usize,
    pub cols: usize,
    /// Drawing area width in scene units.
    pub width: F,
    /// Drawing area height in scene units.
    pub height: F,
    /// Margin kept free on every side.
    pub padding: F,
    pub method: Integrator,
    pub shear_enabled: bool,
    /// Time step used for every tick. Default: 0.016.
    pub dt: F,
    /// Clamp after Euler steps as well. Default: false (Euler runs unclamped).
    pub clamp_after_euler: bool,
    /// Spring constants and point mass, fixed for a simulation's lifetime.
    pub material: Material<F>,
    /// Restoring-force value surfaced by the UI. Stored and reported only;
    /// the force model uses `material`.
    pub restoring_force: F,
    /// Damping value surfaced by the UI. Stored and reported only.
    pub damping: F,
}

impl<F: Float> SimulationConfig<F> {
    /// Task 1 on an 800x600 area with 40 units of padding, Euler, h = 0.016.
    pub fn new() -> Self {
        let material = Material::default();
        SimulationConfig {
            preset: Preset::SingleSpring,
            rows: 1,
            cols: 2,
            width: F::from_f32(800.0),
            height: F::from_f32(600.0),
            padding: F::from_f32(40.0),
            method: Integrator::SemiImplicitEuler,
            shear_enabled: false,
            dt: F::from_f32(DEFAULT_DT),
            clamp_after_euler: false,
            restoring_force: material.structural.stiffness,
            damping: material.structural.damping,
            material,
        }
    }

    /// Select a preset, adopting its fixed dimensions and shear setting.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        if let Some((rows, cols)) = preset.dimensions() {
            self.rows = rows;
            self.cols = cols;
        }
        if let Some(shear) = preset.shear() {
            self.shear_enabled = shear;
        }
        self
    }

    /// Set grid dimensions. Ignored by presets with fixed dimensions.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        if self.preset.dimensions().is_none() {
            self.rows = rows;
            self.cols = cols;
        }
        self
    }

    pub fn with_area(mut self, width: F, height: F, padding: F) -> Self {
        self.width = width;
        self.height = height;
        self.padding = padding;
        self
    }

    pub fn with_method(mut self, method: Integrator) -> Self {
        self.method = method;
        self
    }

    pub fn with_shear(mut self, enabled: bool) -> Self {
        self.shear_enabled = enabled;
        self
    }

    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_clamp_after_euler(mut self, clamp: bool) -> Self {
        self.clamp_after_euler = clamp;
        self
    }

    pub fn with_material(mut self, material: Material<F>) -> Self {
        self.material = material;
        self
    }

    /// Set the UI-surfaced restoring force and damping. They have no effect on stepping.
    pub fn with_ui_parameters(mut self, restoring_force: F, damping: F) -> Self {
        self.restoring_force = restoring_force;
        self.damping = damping;
        self
    }

    pub fn bounds(&self) -> Bounds<F> {
        Bounds::new(self.width, self.height, self.padding)
    }

    /// Check the parts of the configuration the grid constructor does not.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= F::zero() {
            return Err(SimulationError::InvalidTimeStep);
        }
        self.material.validate()
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
