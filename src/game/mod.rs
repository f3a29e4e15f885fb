//! Game Module
//!
//! Everything above the raw geometry: the entity tree, the tick loop,
//! the standard scenario and the data-only view model.

pub mod config;
pub mod objects;
pub mod scenario;
pub mod view;
pub mod world;

// Re-export the working set most callers need
pub use config::{SimConfig, ViewConfig};
pub use objects::{
    ArmourPlate, Body, Neighbours, Node, PLATE_MASS_FACTOR, PlateMark, PlatePath, PlateState,
    Pose, Shell, Ship, ShipError, Strike,
};
pub use view::{Colour, RenderItem, SHELL_COLOUR, SHIP_COLOUR, ShapeData, Viewport, render_list, state_colour};
pub use world::World;
