//! Per-step force accumulation over every spring of the grid.

use crate::float::Float;
use crate::grid::{EdgeKind, Grid};
use crate::spring::{apply_spring, Material, SpringParams};

fn params_for<F: Float>(material: &Material<F>, kind: EdgeKind) -> &SpringParams<F> {
    match kind {
        EdgeKind::Structural => &material.structural,
        EdgeKind::Shear => &material.shear,
    }
}

/// Zero every force, then apply each structural spring and, if
/// `include_shear`, each shear spring.
///
/// Must run exactly once before an integrator step.
pub fn accumulate_forces<F: Float>(grid: &mut Grid<F>, material: &Material<F>, include_shear: bool) {
    grid.clear_forces();
    let topology = grid.topology();
    let points = grid.points_mut();
    for edge in topology.edges(include_shear) {
        apply_spring(points, edge.a, edge.b, params_for(material, edge.kind), material.mass);
    }
}

/// Elastic energy stored in the springs that `accumulate_forces` would apply.
pub fn potential_energy<F: Float>(grid: &Grid<F>, material: &Material<F>, include_shear: bool) -> F {
    let points = grid.points();
    grid.topology()
        .edges(include_shear)
        .fold(F::zero(), |acc, edge| {
            let length = points[edge.a].pos.distance(points[edge.b].pos);
            acc + params_for(material, edge.kind).potential_energy(length)
        })
}
