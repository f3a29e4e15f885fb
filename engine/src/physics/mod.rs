//! Physics module for the Broadside engine
//!
//! Custom 2D geometry and terminal-ballistics implementation for the naval
//! gunnery simulation. Built from scratch without external physics library
//! dependencies.
//!
//! # Philosophy
//!
//! Study reference implementations, understand algorithms, build our own.
//! The collision pipeline favours cheap approximate primitives whose exact
//! quirks the gameplay depends on (see [`geometry`]); they are contract,
//! not implementation detail.
//!
//! # Unit System
//!
//! Plain scene units rather than SI: a destroyer hull is ~100 units long,
//! speeds are units/second, angles are radians. Plate mass follows the
//! fixed areal convention length * thickness * density * 2000.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam (DVec2)
//! - [`vec2`] - Polar/Cartesian bridge, rotation, angle wrapping
//! - [`geometry`] - Bounding boxes, membership tests, segment intersection
//! - [`clip`] - Cohen-Sutherland segment/box clipping primitive
//! - [`penetration`] - Armour penetration and ricochet formulas

pub mod clip;
pub mod geometry;
pub mod penetration;
pub mod types;
pub mod vec2;

// Re-export commonly used items at the physics module level
pub use geometry::{Aabb, Segment, clip_to_aabb, point_on_segment, segment_intersection};
pub use penetration::{
    DEFLECTION_SPEED_FACTOR, GRAZING_THRESHOLD, RESTRIKE_NUDGE, bleed_factor, effective_depth,
    mirror_direction, penetration_capability,
};
pub use types::DVec2;
pub use vec2::{cartesian_to_polar, polar_to_cartesian, rotate, sign, wrap_angle};
