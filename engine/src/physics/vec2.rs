//! Polar/Cartesian vector helpers
//!
//! glam's `DVec2` covers the linear algebra (add, subtract, scale, length);
//! this module adds the polar bridge the gunnery code leans on: angle-first
//! conversions, rotation by polar round-trip, angle wrapping and a
//! sign-carry helper.
//!
//! # Conventions
//!
//! - Angles are radians, measured counter-clockwise from +x.
//! - `cartesian_to_polar` reports angles in `(-PI, PI]` (atan2 range).
//! - `wrap_angle` maps into `[0, TAU)`; nothing else normalizes angles,
//!   so intermediate math may carry angles of any magnitude.

use glam::DVec2;
use std::f64::consts::TAU;

/// Convert a polar pair (radius, angle) to a Cartesian vector.
///
/// # Example
/// ```
/// use broadside_engine::physics::vec2::polar_to_cartesian;
///
/// let v = polar_to_cartesian(2.0, std::f64::consts::FRAC_PI_2);
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn polar_to_cartesian(r: f64, a: f64) -> DVec2 {
    DVec2::new(r * a.cos(), r * a.sin())
}

/// Convert a Cartesian vector to a polar (radius, angle) pair.
///
/// The angle comes from `atan2`, so it lies in `(-PI, PI]`.
#[inline]
pub fn cartesian_to_polar(c: DVec2) -> (f64, f64) {
    (c.length(), c.y.atan2(c.x))
}

/// Rotate a Cartesian vector counter-clockwise by `angle` radians.
///
/// Implemented as a polar round-trip (to polar, add the angle, back to
/// Cartesian) rather than a rotation matrix; the collision code depends on
/// this formulation agreeing exactly with the polar helpers above.
///
/// # Example
/// ```
/// use broadside_engine::physics::vec2::rotate;
/// use glam::DVec2;
///
/// let v = rotate(DVec2::new(1.0, 0.0), std::f64::consts::PI);
/// assert!((v.x + 1.0).abs() < 1e-12);
/// assert!(v.y.abs() < 1e-12);
/// ```
#[inline]
pub fn rotate(c: DVec2, angle: f64) -> DVec2 {
    let (r, a) = cartesian_to_polar(c);
    polar_to_cartesian(r, a + angle)
}

/// Wrap an angle into `[0, TAU)` by repeatedly adding or subtracting a
/// full turn. Terminates for any finite input and is idempotent.
///
/// # Example
/// ```
/// use broadside_engine::physics::vec2::wrap_angle;
/// use std::f64::consts::PI;
///
/// assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
/// assert_eq!(wrap_angle(0.0), 0.0);
/// ```
pub fn wrap_angle(mut a: f64) -> f64 {
    while a < 0.0 {
        a += TAU;
    }
    while a >= TAU {
        a -= TAU;
    }
    a
}

/// Sign of `x` as ±1.0 by sign carry (`copysign`).
///
/// Positive zero maps to +1.0, negative zero to -1.0.
#[inline]
pub fn sign(x: f64) -> f64 {
    1.0f64.copysign(x)
}
