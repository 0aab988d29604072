use springgrid::{Integrator, Preset, Simulation, SimulationConfig, Vec2};

fn run(method: Integrator, preset: Preset, steps: usize) -> Vec<Vec2<f32>> {
    let config = SimulationConfig::new()
        .with_preset(preset)
        .with_method(method);
    let mut sim = Simulation::initialize(config).unwrap();
    for _ in 0..steps {
        sim.step();
    }
    sim.positions()
}

#[test]
fn euler_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run(Integrator::SemiImplicitEuler, Preset::Cloth, 300)).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn verlet_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run(Integrator::Verlet, Preset::Chain, 300)).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn ui_parameters_do_not_affect_stepping() {
    let baseline = run(Integrator::SemiImplicitEuler, Preset::Membrane, 200);

    let config = SimulationConfig::new()
        .with_preset(Preset::Membrane)
        .with_ui_parameters(1000.0, 50.0);
    let mut sim = Simulation::initialize(config).unwrap();
    sim.set_ui_parameters(-3.0, 0.0);
    for _ in 0..200 {
        sim.step();
    }
    assert_eq!(sim.positions(), baseline);
    assert_eq!(sim.config().restoring_force, -3.0);
}
