//! Broadside Engine Library
//!
//! The simulation core of a 2D naval gunnery game: exact segment
//! geometry, a recursive pose tree of armoured entities, and the
//! terminal-ballistics model that decides whether a shell defeats a
//! plate or glances off it. Everything here is headless; presentation
//! reads the data-only view model and never feeds back.
//!
//! # Modules
//!
//! - [`physics`] - Vector math, bounding boxes, segment intersection, clipping, penetration formulas
//! - [`game`] - Entities and the pose tree, the world tick loop, scenario setup, view model
//!
//! # Example
//!
//! ```
//! use broadside_engine::game::config::SimConfig;
//! use broadside_engine::game::scenario;
//! use broadside_engine::game::world::World;
//!
//! let config = SimConfig::default();
//! // One frame at the capped rate, time-compressed
//! let dt = (1.0 / 30.0) * config.sim_speed;
//!
//! let mut world = World::new(scenario::initial_state().unwrap(), config);
//! world.step(dt);
//! assert_eq!(world.ticks(), 1);
//! ```

pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the geometry workhorses at crate level for convenience
pub use physics::{Aabb, DVec2, Segment};
// Re-export the polar/Cartesian bridge
pub use physics::{cartesian_to_polar, polar_to_cartesian, rotate, wrap_angle};
