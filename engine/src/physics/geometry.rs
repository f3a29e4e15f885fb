//! Bounding boxes and segment intersection
//!
//! The collision pipeline is built from a handful of deliberately cheap
//! primitives: axis-aligned boxes with an explicit "no geometry" sentinel
//! (`Option<Aabb>`), a permissive on-segment membership test, and an
//! infinite-line 2x2 solve for segment intersection. The membership test
//! accepts any point whose x lies strictly inside the segment's x-range OR
//! whose y lies strictly inside its y-range; combined with the line solve
//! this admits some points a strict containment test would reject, and the
//! gunnery outcomes depend on that exact behaviour. Tighten it and shots
//! start missing plates they used to hit.
//!
//! # Example
//!
//! ```
//! use broadside_engine::physics::geometry::{Segment, segment_intersection};
//! use glam::DVec2;
//!
//! let s1 = Segment::new(DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0));
//! let s2 = Segment::new(DVec2::new(0.0, -1.0), DVec2::new(0.0, 1.0));
//! let hit = segment_intersection(s1, s2).unwrap();
//! assert!(hit.length() < 1e-12);
//! ```

use glam::DVec2;

use crate::physics::clip;

/// Axis-aligned bounding box with min/max corners.
///
/// An empty point set has no box at all; APIs that can produce that case
/// return `Option<Aabb>` and callers must check before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Component-wise minimum corner
    pub min: DVec2,
    /// Component-wise maximum corner
    pub max: DVec2,
}

impl Aabb {
    /// Creates a box from two corners (assumed already min/max ordered).
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Tight box around a point set.
    ///
    /// # Returns
    /// * `None` - the slice is empty
    /// * `Some(aabb)` - component-wise min/max corners; a single point
    ///   yields a degenerate box with min == max
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    /// Union of possibly-absent boxes. `None` entries are skipped; the
    /// result is `None` only when every entry is `None`.
    pub fn union<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        boxes.into_iter().flatten().reduce(|acc, b| Self {
            min: acc.min.min(b.min),
            max: acc.max.max(b.max),
        })
    }

    /// Absolute width and height of the box.
    pub fn dims(&self) -> DVec2 {
        (self.max - self.min).abs()
    }

    /// Strict open-interval containment on both axes; points on the
    /// boundary are outside.
    pub fn contains(&self, p: DVec2) -> bool {
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }
}

/// A segment between two points.
///
/// Undirected for the geometric tests; directed (start toward end) when it
/// stands for a projectile's travel this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint (travel origin for sweep segments)
    pub start: DVec2,
    /// Second endpoint (travel destination for sweep segments)
    pub end: DVec2,
}

impl Segment {
    /// Creates a segment from its endpoints.
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Bounding box of the two endpoints. Always present.
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.start.min(self.end),
            max: self.start.max(self.end),
        }
    }
}

/// Permissive on-segment membership for a point assumed collinear with the
/// segment's carrier line.
///
/// Accepts when p.x lies strictly inside the segment's x-range OR p.y lies
/// strictly inside its y-range. This is an OR of two half-tests, not a
/// containment check: for near-axis-aligned segments one axis decides
/// alone. The intersection routine below is tuned to this test.
pub fn point_on_segment(p: DVec2, seg: Segment) -> bool {
    let b = seg.bounds();
    (b.min.x < p.x && p.x < b.max.x) || (b.min.y < p.y && p.y < b.max.y)
}

/// Intersection of two segments, each extended to its infinite carrier
/// line, solved as a 2x2 linear system (A*x + B*y = C per line).
///
/// # Returns
/// * `None` - lines parallel or colinear (zero determinant), or the
///   solution fails the `point_on_segment` test against `s1`
/// * `Some(point)` - the line-line solution
///
/// Membership is checked against `s1` ONLY. The asymmetry is intentional:
/// callers pass the finite query sweep as `s1` and a plate centerline as
/// `s2`, and rely on plate strikes registering even when the solve lands
/// marginally off the plate's own extent.
pub fn segment_intersection(s1: Segment, s2: Segment) -> Option<DVec2> {
    let a1 = s1.end.y - s1.start.y;
    let b1 = s1.start.x - s1.end.x;
    let c1 = a1 * s1.start.x + b1 * s1.start.y;

    let a2 = s2.end.y - s2.start.y;
    let b2 = s2.start.x - s2.end.x;
    let c2 = a2 * s2.start.x + b2 * s2.start.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    let p = DVec2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
    if point_on_segment(p, s1) { Some(p) } else { None }
}

/// Clips a segment to a box via the Cohen-Sutherland primitive.
///
/// # Returns
/// * `None` - the segment lies entirely outside the box
/// * `Some(sub)` - the surviving sub-segment (endpoints moved onto the
///   box boundary where the original crossed it)
pub fn clip_to_aabb(aabb: Aabb, seg: Segment) -> Option<Segment> {
    clip::clip_segment(aabb.min, aabb.max, seg.start, seg.end)
        .map(|(start, end)| Segment::new(start, end))
}
