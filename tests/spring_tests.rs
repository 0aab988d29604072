use springgrid::{apply_spring, MassPoint, SpringParams, Vec2};
use test_case::test_case;

fn pair(a: Vec2<f32>, b: Vec2<f32>) -> [MassPoint<f32>; 2] {
    [MassPoint::at_rest(a), MassPoint::at_rest(b)]
}

#[test_case(50.0, 20.0, 0.1 ; "structural constants")]
#[test_case(70.7, 10.0, 0.05 ; "shear constants")]
#[test_case(5.0, 1000.0, 3.0 ; "stiff short rest")]
#[test_case(200.0, 0.5, 0.0 ; "soft undamped")]
fn forces_are_equal_and_opposite(rest: f32, stiffness: f32, damping: f32) {
    let mut pts = pair(Vec2::new(10.0, 20.0), Vec2::new(47.0, -12.0));
    pts[0].vel = Vec2::new(3.0, -1.0);
    pts[1].vel = Vec2::new(-2.0, 4.0);

    apply_spring(&mut pts, 0, 1, &SpringParams::new(rest, stiffness, damping), 0.2);

    assert_eq!(pts[0].force, -pts[1].force);
    assert!(pts[0].force.length() > 0.0);
}

#[test]
fn zero_force_at_rest_length() {
    // 3-4-5 triangle: distance is exactly 50.
    let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0));
    apply_spring(&mut pts, 0, 1, &SpringParams::new(50.0, 20.0, 0.1), 0.2);
    assert_eq!(pts[0].force, Vec2::zero());
    assert_eq!(pts[1].force, Vec2::zero());
}

#[test]
fn coincident_points_are_ignored() {
    let mut pts = pair(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
    pts[1].vel = Vec2::new(100.0, 0.0);
    apply_spring(&mut pts, 0, 1, &SpringParams::new(50.0, 20.0, 0.1), 0.2);
    assert_eq!(pts[0].force, Vec2::zero());
    assert_eq!(pts[1].force, Vec2::zero());
}

#[test]
fn compressed_spring_pushes_apart() {
    let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 30.0));
    apply_spring(&mut pts, 0, 1, &SpringParams::new(50.0, 20.0, 0.0), 1.0);
    // k (30 - 50) = -400 along +y, so a is pushed to -y and b to +y.
    assert!((pts[0].force.y + 400.0).abs() < 1e-3);
    assert!((pts[1].force.y - 400.0).abs() < 1e-3);
    assert_eq!(pts[0].force.x, 0.0);
}

#[test]
fn force_is_divided_by_mass() {
    let mut light = pair(Vec2::new(0.0, 0.0), Vec2::new(60.0, 0.0));
    let mut heavy = light.clone();
    let params = SpringParams::new(50.0, 20.0, 0.0);
    apply_spring(&mut light, 0, 1, &params, 0.2);
    apply_spring(&mut heavy, 0, 1, &params, 2.0);
    assert!((light[0].force.x - 1000.0).abs() < 1e-2);
    assert!((heavy[0].force.x - 100.0).abs() < 1e-3);
}

#[test]
fn separating_points_are_damped_together() {
    // At rest length, so only the damper acts.
    let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0));
    pts[1].vel = Vec2::new(10.0, 0.0);
    apply_spring(&mut pts, 0, 1, &SpringParams::new(50.0, 20.0, 0.5), 1.0);
    assert!((pts[0].force.x - 5.0).abs() < 1e-6);
    assert!((pts[1].force.x + 5.0).abs() < 1e-6);
}

#[test]
fn transverse_motion_is_not_damped() {
    let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0));
    pts[1].vel = Vec2::new(0.0, 25.0);
    apply_spring(&mut pts, 0, 1, &SpringParams::new(50.0, 20.0, 0.5), 1.0);
    assert_eq!(pts[0].force, Vec2::zero());
    assert_eq!(pts[1].force, Vec2::zero());
}

#[test]
fn accumulation_order_does_not_matter() {
    let positions = [Vec2::new(0.0, 0.0), Vec2::new(63.0, 4.0), Vec2::new(120.0, -9.0)];
    let params = SpringParams::new(50.0, 20.0, 0.1);

    let mut forward: Vec<MassPoint<f32>> = positions.iter().map(|&p| MassPoint::at_rest(p)).collect();
    apply_spring(&mut forward, 0, 1, &params, 0.2);
    apply_spring(&mut forward, 1, 2, &params, 0.2);

    let mut backward = forward.iter().map(|p| MassPoint::at_rest(p.pos)).collect::<Vec<_>>();
    apply_spring(&mut backward, 1, 2, &params, 0.2);
    apply_spring(&mut backward, 0, 1, &params, 0.2);

    for (f, b) in forward.iter().zip(backward.iter()) {
        assert!((f.force.x - b.force.x).abs() < 1e-3);
        assert!((f.force.y - b.force.y).abs() < 1e-3);
    }
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(60.0, 0.0));
    apply_spring(&mut pts, 0, 2, &SpringParams::new(50.0, 20.0, 0.1), 0.2);
}
