//! 2D mass-spring-damper grids with two interchangeable integrators.
//!
//! `springgrid` simulates a rectangular lattice of point masses joined by
//! structural (axis-aligned) and optional shear (diagonal) springs. Each tick
//! rebuilds the spring forces and advances the points with either
//! semi-implicit Euler or velocity-free Störmer–Verlet.
//!
//! # Features
//!
//! - **Spring-damper forces**: Hookean springs with a linear damper along the axis
//! - **Two integrators**: Semi-implicit Euler and Verlet over one shared state
//! - **Presets**: Ready-made scenarios with their initial disturbance
//! - **Drag input**: Clamped position overrides that reset Verlet history
//! - **Observable**: Monitor each stage of a step via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use springgrid::{Integrator, Preset, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::<f32>::new()
//!     .with_preset(Preset::Cloth)
//!     .with_method(Integrator::Verlet);
//! let mut sim = Simulation::initialize(config).unwrap();
//! sim.start();
//! while sim.tick() && sim.step_count() < 60 {}
//! assert_eq!(sim.edges().len(), 20);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod grid;
pub mod forces;
pub mod integrator;
pub mod bounds;
pub mod solver;
pub mod preset;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::MassPoint;
pub use spring::{apply_spring, Material, SpringParams};
pub use grid::{Edge, EdgeKind, Grid, Topology};
pub use forces::accumulate_forces;
pub use integrator::Integrator;
pub use bounds::Bounds;
pub use solver::{step, StepOptions};
pub use preset::Preset;
pub use simulation::Simulation;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimulationError;
