//! Simulation Entities
//!
//! Everything that lives in the world tree: armour plates, ships built
//! from plates, and the shells fired at them. Entities nest through
//! [`Body::children`], with child positions and angles relative to the
//! parent, so a ship carries its plating around and a bulkhead bolted to
//! a ship turns with the hull.
//!
//! [`Node`] is the closed set of entity kinds. Collision queries and
//! updates dispatch through it rather than through a trait object, which
//! keeps the tree cloneable and lets the matcher prove a path leads to a
//! plate before handing out a mutable reference to one.

pub mod armour;
pub mod body;
pub mod shell;
pub mod ship;

pub use armour::{ArmourPlate, PLATE_MASS_FACTOR, PlateState};
pub use body::{Body, PlatePath, Pose, Strike};
pub use shell::Shell;
pub use ship::{Ship, ShipError};

use crate::game::config::SimConfig;
use crate::physics::geometry::{Aabb, Segment};

/// One entity in the world tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// A free or mounted armour plate
    Plate(ArmourPlate),
    /// A hull with plated sides
    Ship(Ship),
    /// A shell in flight
    Shell(Shell),
}

impl Node {
    /// Advance this entity by one tick. Plates and ships drift on their
    /// own kinematics; shells run the sweep resolver against the rest of
    /// the world and report plate hits through `marks`.
    pub fn update(
        &mut self,
        dt: f64,
        neighbours: &Neighbours<'_>,
        marks: &mut Vec<PlateMark>,
        config: &SimConfig,
    ) {
        match self {
            Node::Plate(plate) => plate.body.integrate(dt),
            Node::Ship(ship) => ship.body.integrate(dt),
            Node::Shell(shell) => shell.update(dt, neighbours, marks, config),
        }
    }

    /// World-space bounding box, if the entity has any extent. Ships and
    /// shells have none of their own and report the union over their
    /// children; plates add their own rectangle.
    pub fn bounds(&self, parent: Pose) -> Option<Aabb> {
        match self {
            Node::Plate(plate) => plate.bounds(parent),
            Node::Ship(ship) => ship.body.child_bounds(ship.body.pose_in(parent)),
            Node::Shell(shell) => shell.body.child_bounds(shell.body.pose_in(parent)),
        }
    }

    /// Collect every plate crossing of `query` in this entity's subtree.
    /// `path` carries the child indices walked so far; strikes are
    /// appended to `out` with the path extended to the struck plate.
    pub fn intersect_segment(
        &self,
        query: Segment,
        parent: Pose,
        path: &mut PlatePath,
        out: &mut Vec<Strike>,
    ) {
        match self {
            Node::Plate(plate) => plate.intersect_segment(query, parent, path, out),
            Node::Ship(ship) => {
                ship.body
                    .child_strikes(query, ship.body.pose_in(parent), path, out)
            }
            Node::Shell(shell) => {
                shell
                    .body
                    .child_strikes(query, shell.body.pose_in(parent), path, out)
            }
        }
    }

    /// The entity's kinematic state.
    pub fn body(&self) -> &Body {
        match self {
            Node::Plate(plate) => &plate.body,
            Node::Ship(ship) => &ship.body,
            Node::Shell(shell) => &shell.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Node::Plate(plate) => &mut plate.body,
            Node::Ship(ship) => &mut ship.body,
            Node::Shell(shell) => &mut shell.body,
        }
    }

    /// Walk `path` down the child tree and return the plate it lands on.
    /// An empty path addresses this entity itself. Returns `None` if the
    /// path runs off the tree or ends on something that is not a plate.
    pub fn plate_at_mut(&mut self, path: &[usize]) -> Option<&mut ArmourPlate> {
        match path.split_first() {
            None => match self {
                Node::Plate(plate) => Some(plate),
                _ => None,
            },
            Some((&index, rest)) => self.body_mut().children.get_mut(index)?.plate_at_mut(rest),
        }
    }
}

/// The world as seen by one entity during its update: every other
/// top-level entity, split around the one being updated.
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a> {
    /// Entities before the current one, world indices `0..before.len()`
    pub before: &'a [Node],
    /// Entities after it, world indices from `before.len() + 1`
    pub after: &'a [Node],
}

impl<'a> Neighbours<'a> {
    /// Iterate the neighbouring entities with their world indices, so
    /// strike paths collected during an update address the real tree.
    pub fn iter_indexed(self) -> impl Iterator<Item = (usize, &'a Node)> {
        let split = self.before.len() + 1;
        self.before.iter().enumerate().chain(
            self.after
                .iter()
                .enumerate()
                .map(move |(index, node)| (split + index, node)),
        )
    }
}

/// A plate state change produced during a shell update, addressed by
/// path from the world root. The world applies marks after the update
/// that produced them returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateMark {
    pub path: PlatePath,
    pub state: PlateState,
}
