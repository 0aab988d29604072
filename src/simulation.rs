//! The simulation state object handed between the host and the engine.

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::float::Float;
use crate::forces;
use crate::grid::{Edge, Grid};
use crate::integrator::Integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::preset::Preset;
use crate::solver::{self, StepOptions};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Grid, configuration and run flag of one simulation.
///
/// Topology changes (preset, free-form dimensions) rebuild the grid
/// wholesale; everything else mutates points in place.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    grid: Grid<F>,
    config: SimulationConfig<F>,
    running: bool,
    steps: u64,
}

fn build_grid<F: Float>(config: &SimulationConfig<F>) -> Result<Grid<F>, SimulationError> {
    config.validate()?;
    let mut grid = Grid::new(config.rows, config.cols, config.bounds())?;
    config.preset.apply_disturbance(&mut grid)?;
    Ok(grid)
}

impl<F: Float> Simulation<F> {
    /// Build the grid for `config` and apply the preset disturbance.
    ///
    /// The simulation starts paused.
    pub fn initialize(config: SimulationConfig<F>) -> Result<Self, SimulationError> {
        let grid = build_grid(&config).map_err(|err| {
            log::warn!("rejected configuration for {}: {}", config.preset, err);
            err
        })?;
        log::info!(
            "initialized {} with a {}x{} grid, {} springs",
            config.preset,
            config.rows,
            config.cols,
            grid.topology().edge_count(config.shear_enabled),
        );
        Ok(Simulation { grid, config, running: false, steps: 0 })
    }

    fn rebuild(&mut self, config: SimulationConfig<F>) -> Result<(), SimulationError> {
        let rebuilt = Simulation::initialize(config)?;
        self.grid = rebuilt.grid;
        self.config = rebuilt.config;
        self.steps = 0;
        Ok(())
    }

    /// Rebuild the grid from the current configuration.
    pub fn reset(&mut self) -> Result<(), SimulationError> {
        self.rebuild(self.config)
    }

    /// Switch preset and rebuild. On error the current state is kept.
    pub fn set_preset(&mut self, preset: Preset) -> Result<(), SimulationError> {
        self.rebuild(self.config.with_preset(preset))
    }

    /// Change the grid size and rebuild.
    ///
    /// Only the free-form preset has editable dimensions; other presets
    /// ignore the request.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) -> Result<(), SimulationError> {
        if self.config.preset.dimensions().is_some() {
            log::debug!("{} has fixed dimensions, ignoring {}x{}", self.config.preset, rows, cols);
            return Ok(());
        }
        self.rebuild(self.config.with_dimensions(rows, cols))
    }

    pub fn set_method(&mut self, method: Integrator) {
        if self.config.method != method {
            log::debug!("integration method {} -> {}", self.config.method, method);
            self.config.method = method;
        }
    }

    /// Toggle shear springs for subsequent ticks. The grid is not rebuilt.
    pub fn set_shear_enabled(&mut self, enabled: bool) {
        if self.config.shear_enabled != enabled {
            log::debug!("shear springs {}", if enabled { "enabled" } else { "disabled" });
            self.config.shear_enabled = enabled;
        }
    }

    pub fn set_clamp_after_euler(&mut self, clamp: bool) {
        self.config.clamp_after_euler = clamp;
    }

    /// Record the UI restoring-force and damping values. Stepping ignores them.
    pub fn set_ui_parameters(&mut self, restoring_force: F, damping: F) {
        self.config.restoring_force = restoring_force;
        self.config.damping = damping;
    }

    /// One accumulate + integrate (+ clamp) cycle, regardless of the run flag.
    pub fn step(&mut self) {
        self.step_with(&mut NoOpStepObserver);
    }

    pub fn step_with<O: StepObserver>(&mut self, observer: &mut O) {
        let options = StepOptions {
            method: self.config.method,
            include_shear: self.config.shear_enabled,
            dt: self.config.dt,
            clamp_after_euler: self.config.clamp_after_euler,
        };
        solver::step(&mut self.grid, &self.config.material, &options, observer);
        self.steps += 1;
        log::trace!("step {} ({})", self.steps, options.method);
    }

    /// A scheduled tick: steps only while running.
    ///
    /// Returns whether the host should schedule another tick.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.step();
        true
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("simulation started");
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("simulation stopped after {} steps", self.steps);
            self.running = false;
        }
    }

    /// Flip the run flag and return the new state.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Drag input: move one point, clamped, with its Verlet history reset.
    pub fn set_point_position(&mut self, row: usize, col: usize, pos: Vec2<F>) -> Result<(), SimulationError> {
        self.grid.set_point_position(row, col, pos)
    }

    /// Springs active on the next tick, for rendering.
    pub fn edges(&self) -> AllocVec<Edge> {
        self.grid.edges(self.config.shear_enabled)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.grid.positions()
    }

    pub fn positions_flat(&self) -> AllocVec<F> {
        self.grid.positions_flat()
    }

    /// Kinetic energy from the stored velocities.
    ///
    /// Under Verlet these are the display velocities, so the value is an estimate.
    pub fn kinetic_energy(&self) -> F {
        self.grid.kinetic_energy(self.config.material.mass)
    }

    pub fn potential_energy(&self) -> F {
        forces::potential_energy(&self.grid, &self.config.material, self.config.shear_enabled)
    }

    pub fn total_energy(&self) -> F {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn grid(&self) -> &Grid<F> { &self.grid }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn is_running(&self) -> bool { self.running }
    pub fn step_count(&self) -> u64 { self.steps }
}
