//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library. The simulation
//! runs in a 2D plane at f64 precision, so the workhorse type is `DVec2`.

pub use glam::DVec2;
