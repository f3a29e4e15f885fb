//! Scenario: the gunnery range
//!
//! One armoured hull broadside-on to a single incoming armour-piercing
//! shell. The hull is an elongated hexagon of uniform belt armour with a
//! heavier transverse bulkhead amidships, so a shot that defeats the
//! belt still has something to stop it inside.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use log::info;

use crate::game::objects::{ArmourPlate, Node, Shell, Ship, ShipError};

/// The standard target: a 100 by 30 hexagonal hull, 1.0 thick belt
/// plating all round, and a 3.0 thick bulkhead across the middle.
pub fn ship_template() -> Result<Ship, ShipError> {
    let (length, width) = (100.0, 30.0);
    let hull = vec![
        DVec2::new(-length / 6.0, -width / 2.0),
        DVec2::new(length / 2.0, -width / 4.0),
        DVec2::new(length / 2.0, width / 4.0),
        DVec2::new(-length / 6.0, width / 2.0),
        DVec2::new(-length / 2.0, width / 4.0),
        DVec2::new(-length / 2.0, -width / 4.0),
    ];
    let mut ship = Ship::new(hull, &[(1.0, 1.0); 6])?;
    ship.add_plate(ArmourPlate::new(10.0, 3.0, 1.0, DVec2::ZERO, FRAC_PI_2));
    Ok(ship)
}

/// The opening state: the template ship near the origin, quartered
/// slightly off the firing line, and one heavy shell incoming from the
/// right at 4000 units per second.
pub fn initial_state() -> Result<Vec<Node>, ShipError> {
    let mut ship = ship_template()?;
    ship.body.angle = PI / 7.0;

    let shell = Shell::spawn(
        DVec2::new(100.0, 0.0),
        DVec2::new(-4000.0, 0.0),
        3000.0,
        0.5,
        1.0,
    );

    info!("scenario ready: armoured ship, one incoming shell");
    Ok(vec![Node::Ship(ship), Node::Shell(shell)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::objects::Pose;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_template_has_belt_and_bulkhead() {
        let ship = ship_template().unwrap();
        assert_eq!(ship.body.children.len(), 7, "six belt plates plus the bulkhead");

        let bulkhead = match &ship.body.children[6] {
            Node::Plate(plate) => plate,
            other => panic!("expected the bulkhead plate, got {:?}", other),
        };
        assert!((bulkhead.length - 10.0).abs() < EPSILON);
        assert!((bulkhead.thickness - 3.0).abs() < EPSILON);
        assert!((bulkhead.body.angle - FRAC_PI_2).abs() < EPSILON);
        assert!(bulkhead.body.pos.length() < EPSILON, "bulkhead sits amidships");
    }

    #[test]
    fn test_template_hull_spans_its_design_box() {
        let ship = ship_template().unwrap();
        let points = ship.points(Pose::IDENTITY);
        assert_eq!(points.len(), 6);
        let xs = points.iter().map(|p| p.x);
        let ys = points.iter().map(|p| p.y);
        assert!((xs.clone().fold(f64::MIN, f64::max) - 50.0).abs() < EPSILON);
        assert!((xs.fold(f64::MAX, f64::min) + 50.0).abs() < EPSILON);
        assert!((ys.clone().fold(f64::MIN, f64::max) - 15.0).abs() < EPSILON);
        assert!((ys.fold(f64::MAX, f64::min) + 15.0).abs() < EPSILON);
    }

    #[test]
    fn test_initial_state_places_ship_then_shell() {
        let nodes = initial_state().unwrap();
        assert_eq!(nodes.len(), 2);

        match &nodes[0] {
            Node::Ship(ship) => {
                assert!((ship.body.angle - PI / 7.0).abs() < EPSILON);
                assert!(ship.body.pos.length() < EPSILON);
            }
            other => panic!("ship updates first, got {:?}", other),
        }
        match &nodes[1] {
            Node::Shell(shell) => {
                assert!((shell.body.pos - DVec2::new(100.0, 0.0)).length() < EPSILON);
                assert!((shell.body.vel - DVec2::new(-4000.0, 0.0)).length() < EPSILON);
                assert!((shell.body.mass - 3000.0).abs() < EPSILON);
                assert!((shell.diameter - 0.5).abs() < EPSILON);
                assert!((shell.coefficient - 1.0).abs() < EPSILON);
            }
            other => panic!("expected the incoming shell, got {:?}", other),
        }
    }
}
