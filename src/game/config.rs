//! Simulation Configuration
//!
//! Centralizes the tuning knobs for stepping and presentation so a
//! scenario can slow time down or change the viewport without touching
//! simulation code. Both structs serialize, so a run's report can record
//! exactly what it ran with.

use serde::Serialize;

/// Parameters of the simulation loop itself.
#[derive(Clone, Debug, Serialize)]
pub struct SimConfig {
    /// Time compression: one real second advances the world by this many
    /// simulated seconds. Shells cross the screen in a blink at 1.0
    pub sim_speed: f64,
    /// Most ricochets a single shell resolves within one tick before it
    /// is parked at its last impact point
    pub max_ricochets: usize,
}

impl Default for SimConfig {
    /// Slow-motion viewing defaults: 25x time dilation, generous bounce
    /// budget.
    fn default() -> Self {
        Self {
            sim_speed: 0.04,
            max_ricochets: 16,
        }
    }
}

/// Parameters of the projection from world space to a pixel surface.
#[derive(Clone, Debug, Serialize)]
pub struct ViewConfig {
    /// Pixels per world unit
    pub scale: f64,
    /// Surface width (pixels)
    pub screen_w: u32,
    /// Surface height (pixels)
    pub screen_h: u32,
    /// Shortest side of an off-screen marker icon (pixels)
    pub min_icon_dim: f64,
    /// Frame rate the wall-clock loop aims for
    pub fps_cap: u32,
}

impl Default for ViewConfig {
    /// A 1000x700 window with 3 px per unit: a 100-unit hull spans about
    /// a third of the screen.
    fn default() -> Self {
        Self {
            scale: 3.0,
            screen_w: 1000,
            screen_h: 700,
            min_icon_dim: 5.0,
            fps_cap: 30,
        }
    }
}
