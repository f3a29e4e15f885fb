//! Cohen-Sutherland segment clipping
//!
//! Standalone line-clipping primitive used by the geometry layer as a
//! cheap reject before exact intersection tests. Each endpoint gets a
//! 4-bit outcode describing which side(s) of the box it lies on; segments
//! whose outcodes share a bit are trivially outside, segments with two
//! zero outcodes are trivially inside, and everything else is trimmed one
//! boundary at a time.
//!
//! Every iteration clears at least one outcode bit, so the loop runs at
//! most four trims per segment.

use glam::DVec2;

const INSIDE: u8 = 0b0000;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

/// Outcode of a point relative to the clip box.
fn outcode(p: DVec2, min: DVec2, max: DVec2) -> u8 {
    let mut code = INSIDE;
    if p.x < min.x {
        code |= LEFT;
    } else if p.x > max.x {
        code |= RIGHT;
    }
    if p.y < min.y {
        code |= BOTTOM;
    } else if p.y > max.y {
        code |= TOP;
    }
    code
}

/// Clips the segment `start..end` to the axis-aligned box `min..max`.
///
/// # Arguments
/// * `min` - Minimum corner of the clip box
/// * `max` - Maximum corner of the clip box
/// * `start`, `end` - Segment endpoints
///
/// # Returns
/// * `Some((a, b))` - the portion of the segment inside the box; endpoints
///   that crossed a boundary are moved onto it
/// * `None` - the segment lies entirely outside the box
pub fn clip_segment(min: DVec2, max: DVec2, start: DVec2, end: DVec2) -> Option<(DVec2, DVec2)> {
    let mut p0 = start;
    let mut p1 = end;
    let mut code0 = outcode(p0, min, max);
    let mut code1 = outcode(p1, min, max);

    loop {
        if code0 | code1 == INSIDE {
            // Both endpoints inside (possibly after trimming)
            return Some((p0, p1));
        }
        if code0 & code1 != INSIDE {
            // Both endpoints share an outside half-plane
            return None;
        }

        // Trim the endpoint that is outside. When TOP or BOTTOM is set the
        // endpoints are guaranteed to differ in y (the other endpoint
        // passed the shared-bit test), and likewise in x for LEFT/RIGHT,
        // so the slope divisions are safe.
        let code_out = if code0 != INSIDE { code0 } else { code1 };
        let p = if code_out & TOP != 0 {
            DVec2::new(
                p0.x + (p1.x - p0.x) * (max.y - p0.y) / (p1.y - p0.y),
                max.y,
            )
        } else if code_out & BOTTOM != 0 {
            DVec2::new(
                p0.x + (p1.x - p0.x) * (min.y - p0.y) / (p1.y - p0.y),
                min.y,
            )
        } else if code_out & RIGHT != 0 {
            DVec2::new(
                max.x,
                p0.y + (p1.y - p0.y) * (max.x - p0.x) / (p1.x - p0.x),
            )
        } else {
            DVec2::new(
                min.x,
                p0.y + (p1.y - p0.y) * (min.x - p0.x) / (p1.x - p0.x),
            )
        };

        if code_out == code0 {
            p0 = p;
            code0 = outcode(p0, min, max);
        } else {
            p1 = p;
            code1 = outcode(p1, min, max);
        }
    }
}
