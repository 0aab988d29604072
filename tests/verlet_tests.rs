use springgrid::{
    step, Bounds, Grid, Integrator, Material, NoOpStepObserver, Preset, Simulation,
    SimulationConfig, StepOptions, Vec2,
};

fn task_one(method: Integrator) -> Simulation<f32> {
    let config = SimulationConfig::new()
        .with_preset(Preset::SingleSpring)
        .with_area(800.0, 600.0, 40.0)
        .with_method(method);
    Simulation::initialize(config).unwrap()
}

#[test]
fn unforced_point_stays_put() {
    let mut grid = Grid::new(1, 1, Bounds::new(200.0f32, 200.0, 10.0)).unwrap();
    let start = grid.points()[0].pos;
    let options = StepOptions {
        method: Integrator::Verlet,
        include_shear: true,
        dt: 0.016,
        clamp_after_euler: false,
    };
    for _ in 0..10_000 {
        step(&mut grid, &Material::default(), &options, &mut NoOpStepObserver);
    }
    assert_eq!(grid.points()[0].pos, start);
    assert_eq!(grid.points()[0].prev_pos, start);
}

#[test]
fn verlet_single_spring_stays_finite_and_bounded() {
    let mut sim = task_one(Integrator::Verlet);
    let bounds = *sim.grid().bounds();
    for _ in 0..10_000 {
        sim.step();
        for p in sim.grid().points() {
            assert!(p.pos.is_finite() && p.vel.is_finite());
            assert!(bounds.contains(p.pos), "{:?} escaped {:?}", p.pos, bounds);
        }
    }
}

#[test]
fn euler_single_spring_stays_finite() {
    let mut sim = task_one(Integrator::SemiImplicitEuler);
    let initial = sim.total_energy();
    let mut max_extent = 0.0f32;
    for _ in 0..10_000 {
        sim.step();
        for p in sim.grid().points() {
            assert!(p.pos.is_finite() && p.vel.is_finite());
            max_extent = max_extent.max(p.pos.x.abs()).max(p.pos.y.abs());
        }
    }
    // Oscillates around the midpoint without escaping to infinity.
    assert!(max_extent < 10_000.0, "max extent {}", max_extent);
    assert!(sim.total_energy() < initial);
}

#[test]
fn single_spring_oscillates() {
    let mut sim = task_one(Integrator::SemiImplicitEuler);
    let rest = sim.config().material.structural.rest_length;
    let gap = |sim: &Simulation<f32>| {
        let pts = sim.grid().points();
        pts[1].pos.x - pts[0].pos.x
    };
    let mut went_below_rest = false;
    for _ in 0..200 {
        sim.step();
        if gap(&sim) < rest {
            went_below_rest = true;
            break;
        }
    }
    assert!(went_below_rest, "stretched spring should overshoot its rest length");
}

#[test]
fn verlet_step_clamps_every_point() {
    let config = SimulationConfig::new()
        .with_preset(Preset::Cloth)
        .with_area(800.0, 600.0, 40.0)
        .with_method(Integrator::Verlet);
    let mut sim = Simulation::initialize(config).unwrap();
    let bounds = *sim.grid().bounds();
    for _ in 0..500 {
        sim.step();
        for p in sim.grid().points() {
            assert!(bounds.contains(p.pos), "{:?} escaped {:?}", p.pos, bounds);
        }
    }
}

#[test]
fn euler_is_unclamped_unless_configured() {
    // Task 1 starts with the right point 20 units past the padded edge.
    let mut free = task_one(Integrator::SemiImplicitEuler);
    free.step();
    let max_x = free.grid().bounds().max().x;
    assert!(free.grid().points()[1].pos.x > max_x);

    let mut clamped = task_one(Integrator::SemiImplicitEuler);
    clamped.set_clamp_after_euler(true);
    clamped.step();
    assert_eq!(clamped.grid().points()[1].pos.x, max_x);
}

#[test]
fn verlet_after_euler_uses_stale_history() {
    let mut sim = task_one(Integrator::SemiImplicitEuler);
    let initial_prev = sim.grid().points()[1].prev_pos;
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.grid().points()[1].prev_pos, initial_prev);

    sim.set_method(Integrator::Verlet);
    let before = sim.grid().points()[1].pos;
    sim.step();
    assert_eq!(sim.grid().points()[1].prev_pos, before);
}

#[test]
fn verlet_display_velocity_is_central_difference() {
    let mut grid = Grid::new(1, 2, Bounds::new(800.0f64, 600.0, 40.0)).unwrap();
    grid.displace(0, 1, Vec2::new(-600.0, 0.0)).unwrap();
    let dt = 0.016;
    let prev_old = grid.points()[0].prev_pos;
    let options = StepOptions {
        method: Integrator::Verlet,
        include_shear: false,
        dt,
        clamp_after_euler: false,
    };
    step(&mut grid, &Material::default(), &options, &mut NoOpStepObserver);
    let p = &grid.points()[0];
    let expected = (p.pos.x - prev_old.x) / (2.0 * dt);
    assert!((p.vel.x - expected).abs() < 1e-9);
}
