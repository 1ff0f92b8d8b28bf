use super::*;
use crate::collision::{detect_collisions, resolve_collisions, CollisionPair, PENETRATION_THRESHOLD};

const EPS: f32 = 1e-3;

fn body_at(id: u32, x: f32, y: f32, w: f32, h: f32, mass: f32) -> RigidBody {
    let mut body = RigidBody::new(x, y, w, h, mass);
    body.id = id;
    body
}

#[test]
fn add_body_assigns_sequential_ids() {
    let mut world = WorldCore::new();
    let a = world.add_body(RigidBody::new(0.0, 0.0, 1.0, 1.0, 1.0));
    let b = world.add_body(RigidBody::new(5.0, 0.0, 1.0, 1.0, 1.0));
    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert_eq!(world.body_count(), 2);
}

#[test]
fn detector_registers_overlap_and_clears_on_separation() {
    let mut bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, 0.9, 0.0, 1.0, 1.0, 1.0),
    ];
    let mut registry = CollisionRegistry::new();

    let tested = detect_collisions(&bodies, &mut registry);
    assert_eq!(tested, 1);

    let info = registry
        .get(&CollisionPair::new(1, 2))
        .expect("overlapping pair should be registered");
    assert_eq!(info.normal, Vec2::new(1.0, 0.0));
    assert!((info.penetration + 0.1).abs() < EPS);

    // Moving apart clears the entry on the next pass.
    bodies[1].pos.x = 3.0;
    detect_collisions(&bodies, &mut registry);
    assert!(registry.is_empty());
}

#[test]
fn single_body_is_never_tested_against_itself() {
    let bodies = vec![body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0)];
    let mut registry = CollisionRegistry::new();
    let tested = detect_collisions(&bodies, &mut registry);
    assert_eq!(tested, 0);
    assert!(registry.is_empty());
}

#[test]
fn detection_outcome_is_independent_of_enumeration_order() {
    // Same two bodies, list order reversed: the canonical pair key and the
    // first->second normal must not change.
    let forward = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, 0.9, 0.0, 1.0, 1.0, 1.0),
    ];
    let reversed = vec![
        body_at(2, 0.9, 0.0, 1.0, 1.0, 1.0),
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
    ];

    let mut reg_forward = CollisionRegistry::new();
    let mut reg_reversed = CollisionRegistry::new();
    detect_collisions(&forward, &mut reg_forward);
    detect_collisions(&reversed, &mut reg_reversed);

    let pair = CollisionPair::new(1, 2);
    let a = reg_forward.get(&pair).expect("forward entry");
    let b = reg_reversed.get(&pair).expect("reversed entry");
    assert_eq!(a.normal, b.normal);
    assert!((a.penetration - b.penetration).abs() < EPS);
}

#[test]
fn axis_selection_picks_shallower_axis() {
    // Deep y-overlap, shallow x-overlap: the x-axis carries the contact.
    let bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, 0.9, 0.5, 1.0, 1.0, 1.0),
    ];
    let mut registry = CollisionRegistry::new();
    detect_collisions(&bodies, &mut registry);

    let info = registry.get(&CollisionPair::new(1, 2)).expect("entry");
    assert_eq!(info.normal, Vec2::new(1.0, 0.0));
    assert!((info.penetration + 0.1).abs() < EPS);
}

#[test]
fn axis_selection_normal_points_from_first_to_second() {
    // Second body sits to the LEFT of the first: normal flips sign.
    let bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, -0.9, 0.0, 1.0, 1.0, 1.0),
    ];
    let mut registry = CollisionRegistry::new();
    detect_collisions(&bodies, &mut registry);

    let info = registry.get(&CollisionPair::new(1, 2)).expect("entry");
    assert_eq!(info.normal, Vec2::new(-1.0, 0.0));
}

#[test]
fn axis_selection_tie_prefers_vertical() {
    // Exactly equal gaps on both axes resolve to the y-axis.
    let bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, 0.9, 0.9, 1.0, 1.0, 1.0),
    ];
    let mut registry = CollisionRegistry::new();
    detect_collisions(&bodies, &mut registry);

    let info = registry.get(&CollisionPair::new(1, 2)).expect("entry");
    assert_eq!(info.normal, Vec2::new(0.0, 1.0));
}

#[test]
fn separating_pair_is_left_untouched() {
    let mut bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 1.0),
        body_at(2, 0.9, 0.0, 1.0, 1.0, 1.0),
    ];
    bodies[0].velocity = Vec2::new(-1.0, 0.0);
    bodies[1].velocity = Vec2::new(1.0, 0.0);

    let mut registry = CollisionRegistry::new();
    detect_collisions(&bodies, &mut registry);
    assert_eq!(registry.len(), 1);

    let outcome = resolve_collisions(&mut bodies, &registry, 1.0 / 60.0);
    assert_eq!(outcome.impulses, 0);
    assert_eq!(bodies[0].velocity, Vec2::new(-1.0, 0.0));
    assert_eq!(bodies[1].velocity, Vec2::new(1.0, 0.0));
}

#[test]
fn static_static_overlap_is_a_noop() {
    let mut bodies = vec![
        body_at(1, 0.0, 0.0, 1.0, 1.0, 0.0),
        body_at(2, 0.5, 0.0, 1.0, 1.0, 0.0),
    ];
    let mut registry = CollisionRegistry::new();
    detect_collisions(&bodies, &mut registry);
    assert_eq!(registry.len(), 1);

    let outcome = resolve_collisions(&mut bodies, &registry, 1.0 / 60.0);
    assert_eq!(outcome.impulses, 0);
    assert_eq!(outcome.corrections, 0);
    assert_eq!(bodies[0].pos, Vec2::new(0.0, 0.0));
    assert_eq!(bodies[1].pos, Vec2::new(0.5, 0.0));
    assert_eq!(bodies[0].velocity, Vec2::zero());
    assert_eq!(bodies[1].velocity, Vec2::zero());
}

#[test]
fn elastic_head_on_collision_exchanges_velocities() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);

    let mut left = RigidBody::new(-0.4, 0.0, 1.0, 1.0, 1.0);
    left.set_bounciness(1.0);
    left.velocity = Vec2::new(5.0, 0.0);
    let mut right = RigidBody::new(0.4, 0.0, 1.0, 1.0, 1.0);
    right.set_bounciness(1.0);
    right.velocity = Vec2::new(-5.0, 0.0);

    let a = world.add_body(left);
    let b = world.add_body(right);
    world.step();

    // Equal masses, bounciness 1: the pair's relative velocity along the
    // normal reverses with equal magnitude, i.e. the velocities swap.
    let (vax, _) = world.body_velocity(a).unwrap();
    let (vbx, _) = world.body_velocity(b).unwrap();
    assert!((vax + 5.0).abs() < EPS, "left body should bounce back, got {vax}");
    assert!((vbx - 5.0).abs() < EPS, "right body should bounce back, got {vbx}");
}

#[test]
fn falling_body_lands_on_static_floor_and_grounds() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);

    // Floor AABB [-1, -0.1] x [1, 0], infinite mass.
    let floor = world.add_body(RigidBody::new(0.0, -0.05, 2.0, 0.1, 0.0));

    let mut falling = RigidBody::new(0.0, 0.45, 1.0, 1.0, 1.0);
    falling.set_bounciness(0.0);
    falling.velocity = Vec2::new(0.0, -5.0);
    let body = world.add_body(falling);

    world.step();

    // Vertical contact: x-overlap is the wider one, so the y-axis carries
    // the collision, and one resolve+integrate cycle kills the downward
    // velocity entirely.
    let (_, vy) = world.body_velocity(body).unwrap();
    assert!(vy >= 0.0, "body must no longer penetrate downward, got vy {vy}");
    assert!(vy.abs() < EPS);

    assert!(world.is_grounded(body));
    assert!(!world.is_grounded(floor), "the floor has nothing beneath it");
}

#[test]
fn resting_pair_penetration_converges() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);

    world.add_body(RigidBody::new(0.0, -0.05, 2.0, 0.1, 0.0));
    let body = world.add_body(RigidBody::new(0.0, 0.45, 1.0, 1.0, 1.0));
    let pair = CollisionPair::new(1, 2);

    world.step();
    let initial = world.collisions.get(&pair).expect("resting overlap").penetration;
    assert!(initial < 0.0);

    for _ in 0..12 {
        world.step();
    }

    // Fractional correction shrinks the overlap each tick until it falls
    // under the correction threshold instead of diverging.
    let residual = world.collisions.get(&pair).expect("still touching").penetration;
    assert!(residual.abs() < initial.abs());
    assert!(residual.abs() <= PENETRATION_THRESHOLD + EPS);

    // Once under the threshold the pair is stable: no further drift.
    let before = world.body_position(body).unwrap();
    world.step();
    let after = world.body_position(body).unwrap();
    assert!((before.1 - after.1).abs() < EPS);
}

#[test]
fn static_floor_never_moves_under_load() {
    let mut world = WorldCore::new();

    let floor = world.add_body(RigidBody::new(0.0, -0.05, 4.0, 0.1, 0.0));
    let mut dropped = RigidBody::new(0.0, 1.0, 1.0, 1.0, 1.0);
    dropped.set_bounciness(0.0);
    let body = world.add_body(dropped);

    for _ in 0..120 {
        world.step();
    }

    assert_eq!(world.body_position(floor).unwrap(), (0.0, -0.05));
    assert_eq!(world.body_velocity(floor).unwrap(), (0.0, 0.0));

    // The dropped body settles on top of the floor instead of sinking through.
    let (_, y) = world.body_position(body).unwrap();
    assert!(y > 0.4 && y < 0.55, "body should rest on the floor, got y {y}");
}

#[test]
fn force_accumulator_is_consumed_exactly_once() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);
    let body = world.add_body(RigidBody::new(0.0, 0.0, 1.0, 1.0, 2.0));

    assert!(world.apply_force(body, 12.0, 0.0));
    world.step();
    let (vx, _) = world.body_velocity(body).unwrap();
    let expected = 12.0 * 0.5 * world.fixed_timestep();
    assert!((vx - expected).abs() < EPS);

    // Second step: the force is gone, velocity stays.
    world.step();
    let (vx2, _) = world.body_velocity(body).unwrap();
    assert!((vx2 - vx).abs() < EPS);
}

#[test]
fn grounded_requires_low_vertical_speed() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);

    world.add_body(RigidBody::new(0.0, -0.05, 2.0, 0.1, 0.0));
    let body = world.add_body(RigidBody::new(0.0, 0.5, 1.0, 1.0, 1.0));

    assert!(world.is_grounded(body));
    world.set_body_velocity(body, 0.0, 5.0);
    assert!(!world.is_grounded(body));
}

#[test]
fn grounded_requires_horizontal_overlap() {
    let mut world = WorldCore::new();
    world.add_body(RigidBody::new(0.0, -0.05, 2.0, 0.1, 0.0));
    let body = world.add_body(RigidBody::new(3.0, 0.5, 1.0, 1.0, 1.0));
    assert!(!world.is_grounded(body));
}

#[test]
fn grounded_ignores_unknown_ids() {
    let world = WorldCore::new();
    assert!(!world.is_grounded(42));
}

#[test]
fn body_accessors_reject_unknown_ids() {
    let mut world = WorldCore::new();
    assert_eq!(world.body_position(7), None);
    assert_eq!(world.body_velocity(7), None);
    assert!(!world.set_body_velocity(7, 1.0, 0.0));
    assert!(!world.apply_force(7, 1.0, 0.0));
}

#[test]
fn config_json_loads_and_round_trips() {
    let mut world = WorldCore::new();

    assert!(world.load_config_json("{not json").is_err());
    assert!(world
        .load_config_json(r#"{"fixed_timestep": 0.0}"#)
        .is_err());

    world
        .load_config_json(r#"{"gravity_y": -5.0, "grounded_tolerance": 0.25}"#)
        .expect("partial config should load with defaults");
    assert_eq!(world.gravity, Vec2::new(0.0, -5.0));
    assert_eq!(world.grounded_tol, 0.25);
    assert!(world.fixed_timestep() > 0.0);

    let json = world.config_json();
    assert!(json.contains("\"gravity_y\":-5.0"));

    let mut other = WorldCore::new();
    other.load_config_json(&json).expect("exported config must re-load");
    assert_eq!(other.gravity, world.gravity);
}

#[test]
fn fixed_timestep_setter_rejects_non_positive() {
    let mut world = WorldCore::new();
    let dt = world.fixed_timestep();
    world.set_fixed_timestep(0.0);
    assert_eq!(world.fixed_timestep(), dt);
    world.set_fixed_timestep(-1.0);
    assert_eq!(world.fixed_timestep(), dt);
    world.set_fixed_timestep(0.01);
    assert_eq!(world.fixed_timestep(), 0.01);
}

#[test]
fn perf_stats_track_step_phases() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, 0.0);
    world.enable_perf_metrics(true);

    world.add_body(RigidBody::new(0.0, 0.0, 1.0, 1.0, 1.0));
    world.add_body(RigidBody::new(0.5, 0.0, 1.0, 1.0, 1.0));
    world.add_body(RigidBody::new(9.0, 0.0, 1.0, 1.0, 1.0));
    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), 3);
    assert_eq!(stats.pairs_tested(), 3);
    assert_eq!(stats.active_collisions(), 1);
    assert!(stats.step_ms() >= 0.0);
}
