//! Gunnery Tests - Sweep Resolution, Penetration and Ricochet
//!
//! End-to-end tests of the shell resolver through `World::step`: clean
//! penetrations with exact bleed arithmetic, deflections with mirrored
//! headings and conserved travel budget, the grazing fallback, the
//! ricochet bound, and the standard scenario played out for real.

use std::f64::consts::{FRAC_PI_2, PI};

use broadside_engine::game::config::SimConfig;
use broadside_engine::game::objects::{ArmourPlate, Node, PlateState, Shell};
use broadside_engine::game::scenario;
use broadside_engine::game::world::World;
use broadside_engine::physics::vec2::cartesian_to_polar;
use glam::DVec2;

const EPSILON: f64 = 1e-9;

/// A 10-long upright plate whose face blocks travel along the x-axis.
fn facing_plate(pos: DVec2, thickness: f64) -> Node {
    Node::Plate(ArmourPlate::new(10.0, thickness, 1.0, pos, FRAC_PI_2))
}

fn plate_state(node: &Node) -> PlateState {
    match node {
        Node::Plate(plate) => plate.state,
        other => panic!("expected a plate, got {:?}", other),
    }
}

// ============================================================================
// Penetration (pen > depth)
// ============================================================================

#[test]
fn test_clean_penetration_bleeds_exactly() {
    // Mass 5776 makes sqrt(m) exactly 76, so with k = 10 and calibre 1
    // a 1000 u/s shell has penetration exactly 10 against the formula's
    // 7.6e4 divisor. The facing plate is 1 thick at square incidence, so
    // depth is exactly 1 and the bleed factor is exactly 9/10.
    let mut world = World::new(
        vec![
            facing_plate(DVec2::new(10.0, 0.0), 1.0),
            Node::Shell(Shell::spawn(
                DVec2::ZERO,
                DVec2::new(1000.0, 0.0),
                5776.0,
                1.0,
                10.0,
            )),
        ],
        SimConfig::default(),
    );

    world.step(0.02);

    assert_eq!(plate_state(&world.nodes()[0]), PlateState::Penetrated);

    let shell = world.nodes()[1].body();
    assert!(
        (shell.vel.length() - 900.0).abs() < EPSILON,
        "speed 1000 scaled by (10-1)/10, got {}",
        shell.vel.length()
    );
    assert!(shell.vel.y.abs() < EPSILON, "penetration never bends the path");
    assert!(
        (shell.pos - DVec2::new(20.0, 0.0)).length() < EPSILON,
        "shell carries on to the end of its travel segment, got {:?}",
        shell.pos
    );
}

// ============================================================================
// Deflection (pen <= depth)
// ============================================================================

#[test]
fn test_deflection_mirrors_and_conserves_travel() {
    // Same plate, but at 500 u/s the penetration is exactly 0.5 against
    // depth 1: the shell bounces. Off a face at pi/2 with incoming
    // heading 0 the mirrored heading is exactly pi.
    let mut world = World::new(
        vec![
            facing_plate(DVec2::new(10.0, 0.0), 1.0),
            Node::Shell(Shell::spawn(
                DVec2::ZERO,
                DVec2::new(500.0, 0.0),
                5776.0,
                1.0,
                1.0,
            )),
        ],
        SimConfig::default(),
    );

    // Travel segment (0,0) -> (20,0): impact at 10, so 10 units of the
    // budget remain for the mirrored leg
    world.step(0.04);

    assert_eq!(plate_state(&world.nodes()[0]), PlateState::Deflected);

    let shell = world.nodes()[1].body();
    assert!(
        (shell.vel.length() - 250.0).abs() < 1e-6,
        "deflection halves speed, got {}",
        shell.vel.length()
    );
    let (_, heading) = cartesian_to_polar(shell.vel);
    assert!(
        (heading - PI).abs() < 1e-9,
        "mirrored heading should be pi, got {}",
        heading
    );
    assert!(
        shell.pos.length() < 1e-9,
        "10 remaining units along heading pi from x=10 land at the origin, got {:?}",
        shell.pos
    );
}

#[test]
fn test_grazing_strike_uses_length_fallback() {
    // Plate tilted 1e-4 rad off the flight line: |sin| is under the 1e-3
    // grazing threshold, so resistance is length * density = 10 rather
    // than thickness / sin = 10000. Penetration 20 defeats the fallback
    // where the steep formula would have bounced it.
    let mut world = World::new(
        vec![
            Node::Plate(ArmourPlate::new(10.0, 1.0, 1.0, DVec2::new(10.0, 0.0), 1e-4)),
            Node::Shell(Shell::spawn(
                DVec2::ZERO,
                DVec2::new(20_000.0, 0.0),
                5776.0,
                1.0,
                1.0,
            )),
        ],
        SimConfig::default(),
    );

    world.step(0.001);

    assert_eq!(plate_state(&world.nodes()[0]), PlateState::Penetrated);

    let shell = world.nodes()[1].body();
    assert!(
        (shell.vel.length() - 10_000.0).abs() < 1e-6,
        "bleed factor (20-10)/20 exactly halves the speed, got {}",
        shell.vel.length()
    );
    assert!(shell.vel.x > 0.0, "a graze that penetrates keeps its heading");
    assert!((shell.pos - DVec2::new(20.0, 0.0)).length() < EPSILON);
}

// ============================================================================
// Ricochet bound
// ============================================================================

#[test]
fn test_ricochet_budget_through_world_config() {
    // Two facing plates form a reflective corridor. A slow shell given a
    // huge travel budget bounces until the configured bound engages and
    // parks it at its last impact.
    let config = SimConfig {
        max_ricochets: 2,
        ..SimConfig::default()
    };
    let mut world = World::new(
        vec![
            facing_plate(DVec2::new(10.0, 0.0), 1.0),
            facing_plate(DVec2::new(-10.0, 0.0), 1.0),
            Node::Shell(Shell::spawn(
                DVec2::ZERO,
                DVec2::new(50.0, 0.0),
                1.0,
                0.5,
                1.0,
            )),
        ],
        config,
    );

    world.step(10.0);

    assert_eq!(plate_state(&world.nodes()[0]), PlateState::Deflected);
    assert_eq!(plate_state(&world.nodes()[1]), PlateState::Deflected);

    // Bounces go right wall, left wall, right wall, where the budget of
    // two re-sweeps runs out
    let shell = world.nodes()[2].body();
    assert!(
        (shell.pos - DVec2::new(10.0, 0.0)).length() < 1e-6,
        "parked at the third impact, got {:?}",
        shell.pos
    );
}

// ============================================================================
// The standard scenario, played out
// ============================================================================

#[test]
fn test_standard_engagement_defeats_belt_but_not_bulkhead() {
    let config = SimConfig::default();
    let dt = (1.0 / 30.0) * config.sim_speed;
    let mut world = World::new(scenario::initial_state().unwrap(), config);

    for _ in 0..60 {
        world.step(dt);
    }
    assert_eq!(world.ticks(), 60);

    let ship = match &world.nodes()[0] {
        Node::Ship(ship) => ship,
        other => panic!("ship should lead the entity list, got {:?}", other),
    };
    let states: Vec<PlateState> = ship.plates().map(|plate| plate.state).collect();
    assert_eq!(states.len(), 7);

    // The shell comes in from the right along y = 0 and meets the lower
    // starboard belt plate first: 4000 u/s defeats 1.0 of belt easily
    assert_eq!(
        states[0],
        PlateState::Penetrated,
        "lower starboard belt should be holed, states {:?}",
        states
    );
    // Inside the hull the slowed shell meets the 3.0 bulkhead and
    // bounces off
    assert_eq!(
        states[6],
        PlateState::Deflected,
        "bulkhead should turn the slowed shell, states {:?}",
        states
    );
    // Nothing else gets holed: after the bulkhead halving the shell is
    // too slow to defeat even the belt again
    let holed = states
        .iter()
        .filter(|state| **state == PlateState::Penetrated)
        .count();
    assert_eq!(holed, 1, "exactly one penetration in this engagement");

    let shell = world.nodes()[1].body();
    assert!(
        shell.vel.length() < 1100.0,
        "belt bleed then bulkhead bounce leave under 1100 u/s, got {}",
        shell.vel.length()
    );
}

#[test]
fn test_engagement_leaves_projectile_trapped_slow() {
    // Much later the shell has rattled around the inside of the hull,
    // halving at every bounce; it never gets fast again
    let config = SimConfig::default();
    let dt = (1.0 / 30.0) * config.sim_speed;
    let mut world = World::new(scenario::initial_state().unwrap(), config);

    for _ in 0..300 {
        world.step(dt);
    }

    let speed = world.nodes()[1].body().vel.length();
    assert!(
        speed < 1100.0,
        "speed only ever falls after the bulkhead bounce, got {}",
        speed
    );
}
