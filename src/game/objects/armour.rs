//! Armour plates: the collidable leaf of the entity tree
//!
//! A plate is a thick line segment. Collision works against the
//! CENTERLINE only; the thickness contributes resistance (and the drawn
//! rectangle), not extra collision surface. Plates carry the per-entity
//! collision state the view layer turns into colour.

use glam::DVec2;
use serde::Serialize;

use crate::physics::geometry::{self, Aabb, Segment};
use crate::physics::vec2::rotate;

use super::body::{Body, PlatePath, Pose, Strike};

/// Mass per unit of length * thickness * density. A fixed areal
/// convention, not SI.
pub const PLATE_MASS_FACTOR: f64 = 2e3;

/// Latest collision outcome on a plate.
///
/// Written by shell resolution, consumed by the view layer for colour,
/// never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlateState {
    /// Not struck yet
    #[default]
    Intact,
    /// A shell punched through
    Penetrated,
    /// A shell bounced off
    Deflected,
}

/// A plate of armour.
///
/// The centerline runs along the plate's local x-axis, so at angle 0 the
/// plate lies horizontal with its length centred on its position.
#[derive(Debug, Clone)]
pub struct ArmourPlate {
    /// Kinematics and any attached children
    pub body: Body,
    /// Centerline length
    pub length: f64,
    /// Thickness across the centerline
    pub thickness: f64,
    /// Material density
    pub density: f64,
    /// Latest collision outcome
    pub state: PlateState,
}

impl ArmourPlate {
    /// Plate with the given dimensions at a parent-relative position and
    /// angle. Mass is derived from the dimensions and is never set
    /// independently.
    pub fn new(length: f64, thickness: f64, density: f64, pos: DVec2, angle: f64) -> Self {
        let mut body = Body::at(pos, angle);
        body.mass = length * thickness * density * PLATE_MASS_FACTOR;
        Self {
            body,
            length,
            thickness,
            density,
            state: PlateState::Intact,
        }
    }

    /// The centerline segment in world space.
    pub fn centerline(&self, pose: Pose) -> Segment {
        let half = rotate(DVec2::new(self.length * 0.5, 0.0), pose.angle);
        Segment::new(pose.pos + half, pose.pos - half)
    }

    /// The plate's rectangle corners in world space, in drawable order.
    pub fn corners(&self, pose: Pose) -> [DVec2; 4] {
        let v1 = rotate(
            DVec2::new(self.length * 0.5, self.thickness * 0.5),
            pose.angle,
        );
        let v2 = rotate(
            DVec2::new(self.length * 0.5, -self.thickness * 0.5),
            pose.angle,
        );
        [pose.pos + v1, pose.pos + v2, pose.pos - v1, pose.pos - v2]
    }

    /// Recursive bounds: the plate's own rectangle unioned with its
    /// children's boxes.
    pub fn bounds(&self, parent: Pose) -> Option<Aabb> {
        let pose = self.body.pose_in(parent);
        Aabb::union([
            self.body.child_bounds(pose),
            Aabb::from_points(&self.corners(pose)),
        ])
    }

    /// Box-gated exact intersection against the centerline.
    ///
    /// The query is first clipped against the plate's recursive bounds; if
    /// nothing survives, the plate and its subtree cannot be crossed and
    /// the exact solve is skipped. A hit on this plate is pushed before
    /// the children's hits; the caller's distance sort makes the order
    /// immaterial downstream.
    pub fn intersect_segment(
        &self,
        query: Segment,
        parent: Pose,
        path: &mut PlatePath,
        out: &mut Vec<Strike>,
    ) {
        let pose = self.body.pose_in(parent);
        if let Some(bounds) = self.bounds(parent) {
            if geometry::clip_to_aabb(bounds, query).is_some() {
                if let Some(point) = geometry::segment_intersection(query, self.centerline(pose)) {
                    out.push(Strike {
                        point,
                        plate: path.clone(),
                        pose,
                        length: self.length,
                        thickness: self.thickness,
                        density: self.density,
                    });
                }
            }
        }
        self.body.child_strikes(query, pose, path, out);
    }
}
