//! Base physics body and pose composition
//!
//! Every entity wraps a [`Body`]: kinematic state plus an ordered list of
//! child nodes. Children hold their position and orientation RELATIVE to
//! the parent; world-space geometry is derived on demand by composing
//! poses down the tree, never stored. Integration runs only on top-level
//! entities, so a child moves exactly because its parent does.
//!
//! # Example
//!
//! ```
//! use broadside_engine::game::objects::{Body, Pose};
//! use glam::DVec2;
//!
//! // A child mounted 5 units forward on a parent facing +y
//! let parent = Pose { pos: DVec2::new(10.0, 0.0), angle: std::f64::consts::FRAC_PI_2 };
//! let child = Body::at(DVec2::new(5.0, 0.0), 0.0);
//! let pose = child.pose_in(parent);
//! assert!((pose.pos - DVec2::new(10.0, 5.0)).length() < 1e-9);
//! ```

use glam::DVec2;

use crate::physics::geometry::{Aabb, Segment};
use crate::physics::vec2::rotate;

use super::Node;

/// Absolute position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position
    pub pos: DVec2,
    /// World-space orientation (radians)
    pub angle: f64,
}

impl Pose {
    /// The world frame itself: origin position, zero angle.
    pub const IDENTITY: Self = Self {
        pos: DVec2::ZERO,
        angle: 0.0,
    };
}

/// Route to a plate in the world tree: the top-level entity index followed
/// by the child index taken at each level down.
pub type PlatePath = Vec<usize>;

/// One crossing between a query segment's carrier line and a plate
/// centerline.
///
/// Everything the shell resolver needs is captured at query time so it
/// never reaches back into the tree mid-resolution: the struck plate's
/// tree location (for marking), its absolute pose (the face orientation)
/// and its resistance parameters.
#[derive(Debug, Clone)]
pub struct Strike {
    /// The crossing point
    pub point: DVec2,
    /// The struck plate's location in the world tree
    pub plate: PlatePath,
    /// The plate's absolute pose; `pose.angle` is the face orientation
    pub pose: Pose,
    /// Plate length (the grazing fallback material)
    pub length: f64,
    /// Plate thickness
    pub thickness: f64,
    /// Plate density
    pub density: f64,
}

/// Kinematic state shared by every entity, plus its child attachments.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position, parent-relative (world-space for top-level entities)
    pub pos: DVec2,
    /// Velocity (units/second)
    pub vel: DVec2,
    /// Mass
    pub mass: f64,
    /// Orientation, parent-relative (radians)
    pub angle: f64,
    /// Angular velocity (radians/second); integrated linearly, never
    /// altered by collisions
    pub spin: f64,
    /// Moment of inertia
    pub inertia: f64,
    /// Attached child entities, in insertion order
    pub children: Vec<Node>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            mass: 1.0,
            angle: 0.0,
            spin: 0.0,
            inertia: 1.0,
            children: Vec::new(),
        }
    }
}

impl Body {
    /// Body at a parent-relative position and angle, otherwise default:
    /// at rest, unit mass and inertia, no children.
    pub fn at(pos: DVec2, angle: f64) -> Self {
        Self {
            pos,
            angle,
            ..Self::default()
        }
    }

    /// Compose this body's relative pose with its parent's absolute pose.
    pub fn pose_in(&self, parent: Pose) -> Pose {
        Pose {
            pos: parent.pos + rotate(self.pos, parent.angle),
            angle: parent.angle + self.angle,
        }
    }

    /// Advance position and angle by one time step.
    pub fn integrate(&mut self, dt: f64) {
        self.pos += self.vel * dt;
        self.angle += self.spin * dt;
    }

    /// Union of the children's recursive boxes. `pose` is this body's own
    /// absolute pose, the frame the children compose against. `None` when
    /// no child contributes a box.
    pub fn child_bounds(&self, pose: Pose) -> Option<Aabb> {
        Aabb::union(self.children.iter().map(|child| child.bounds(pose)))
    }

    /// Collect the children's intersections with `query` into `out`,
    /// extending `path` with each child's index while descending.
    pub fn child_strikes(
        &self,
        query: Segment,
        pose: Pose,
        path: &mut PlatePath,
        out: &mut Vec<Strike>,
    ) {
        for (index, child) in self.children.iter().enumerate() {
            path.push(index);
            child.intersect_segment(query, pose, path, out);
            path.pop();
        }
    }
}
