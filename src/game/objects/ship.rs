//! Ships: hull polygons realised as armour plates
//!
//! A ship is a boundary polygon where every edge becomes one armour plate
//! child. The hull polygon itself never collides; shells only ever meet
//! the plates. Extra plates (internal bulkheads) can be attached after
//! construction.

use std::error::Error;
use std::fmt;

use glam::DVec2;

use crate::physics::vec2::{cartesian_to_polar, rotate};

use super::Node;
use super::armour::ArmourPlate;
use super::body::{Body, Pose};

/// Construction failure for a ship hull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// The boundary polygon has fewer than three points
    DegenerateHull {
        /// Number of points supplied
        points: usize,
    },
    /// The per-edge plating list does not match the edge count
    PlatingMismatch {
        /// Polygon edge count
        edges: usize,
        /// Plating entries supplied
        plates: usize,
    },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::DegenerateHull { points } => {
                write!(f, "Hull polygon needs at least 3 points, got {}", points)
            }
            ShipError::PlatingMismatch { edges, plates } => {
                write!(
                    f,
                    "Hull has {} edges but {} plating entries",
                    edges, plates
                )
            }
        }
    }
}

impl Error for ShipError {}

/// A ship: boundary polygon plus one armour plate per edge.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Kinematics and the plate children
    pub body: Body,
    /// Boundary polygon in ship-local coordinates
    pub hull: Vec<DVec2>,
}

impl Ship {
    /// Builds a ship from a boundary polygon and a parallel per-edge
    /// (thickness, density) plating list.
    ///
    /// Edge i runs from `hull[i]` to `hull[(i + 1) % n]`. Its plate's
    /// centerline matches the edge's length and direction, centred on the
    /// edge midpoint pulled toward the hull origin by half the plate
    /// thickness, so the plate's outer face lies flush with the boundary
    /// instead of straddling it.
    ///
    /// # Errors
    /// [`ShipError::DegenerateHull`] for polygons under three points;
    /// [`ShipError::PlatingMismatch`] when the plating list length differs
    /// from the edge count.
    pub fn new(hull: Vec<DVec2>, plating: &[(f64, f64)]) -> Result<Self, ShipError> {
        if hull.len() < 3 {
            return Err(ShipError::DegenerateHull { points: hull.len() });
        }
        if plating.len() != hull.len() {
            return Err(ShipError::PlatingMismatch {
                edges: hull.len(),
                plates: plating.len(),
            });
        }

        let mut body = Body::default();
        for (i, &(thickness, density)) in plating.iter().enumerate() {
            let p1 = hull[i];
            let p2 = hull[(i + 1) % hull.len()];
            let (length, angle) = cartesian_to_polar(p2 - p1);

            let mut mid = (p1 + p2) * 0.5;
            // An edge midpoint on the hull origin has no inward direction;
            // such a plate stays centred on the boundary.
            let reach = mid.length();
            if reach > 1e-12 {
                mid *= (reach - thickness * 0.5) / reach;
            }

            body.children.push(Node::Plate(ArmourPlate::new(
                length, thickness, density, mid, angle,
            )));
        }

        Ok(Self { body, hull })
    }

    /// Hull polygon vertices in world space.
    pub fn points(&self, parent: Pose) -> Vec<DVec2> {
        let pose = self.body.pose_in(parent);
        self.hull
            .iter()
            .map(|&v| pose.pos + rotate(v, pose.angle))
            .collect()
    }

    /// Attaches an extra plate beyond the edge-generated ones, such as an
    /// internal bulkhead.
    pub fn add_plate(&mut self, plate: ArmourPlate) {
        self.body.children.push(Node::Plate(plate));
    }

    /// The edge-generated and extra plates, in child order.
    pub fn plates(&self) -> impl Iterator<Item = &ArmourPlate> {
        self.body.children.iter().filter_map(|child| match child {
            Node::Plate(plate) => Some(plate),
            _ => None,
        })
    }
}
