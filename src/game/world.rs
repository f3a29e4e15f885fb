//! World: the flat list of top-level entities and the tick loop
//!
//! Entities update one at a time in insertion order. The one being
//! updated gets a [`Neighbours`] view of everyone else, so a shell can
//! sweep the whole world without anything aliasing its own mutable
//! state. Plate hits come back as [`PlateMark`]s and are applied as soon
//! as the update that produced them returns; nothing reads plate state
//! during a tick, so the deferral is invisible to the simulation.

use log::{debug, info, warn};

use crate::game::config::SimConfig;
use crate::game::objects::{Neighbours, Node, PlateMark};

/// The simulation state: entities, configuration and the tick counter.
#[derive(Debug, Clone, Default)]
pub struct World {
    nodes: Vec<Node>,
    /// Tuning knobs; honoured from the next [`step`](World::step) on
    pub config: SimConfig,
    ticks: u64,
}

impl World {
    pub fn new(nodes: Vec<Node>, config: SimConfig) -> Self {
        Self {
            nodes,
            config,
            ticks: 0,
        }
    }

    /// The top-level entities in update order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Ticks stepped since construction or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Replace the entity list and restart the tick count.
    pub fn reset(&mut self, nodes: Vec<Node>) {
        info!("world reset: {} entities", nodes.len());
        self.nodes = nodes;
        self.ticks = 0;
    }

    /// Advance the world by one tick of `dt` simulated seconds.
    ///
    /// `dt` is already time-compressed; drivers multiply their frame
    /// interval by [`SimConfig::sim_speed`] before calling in.
    pub fn step(&mut self, dt: f64) {
        let mut marks: Vec<PlateMark> = Vec::new();
        for index in 0..self.nodes.len() {
            let (before, rest) = self.nodes.split_at_mut(index);
            let Some((current, after)) = rest.split_first_mut() else {
                break;
            };
            current.update(dt, &Neighbours { before, after }, &mut marks, &self.config);
            if !marks.is_empty() {
                debug!(
                    "tick {}: entity {} marked {} plates",
                    self.ticks,
                    index,
                    marks.len()
                );
            }
            for mark in marks.drain(..) {
                self.apply_mark(mark);
            }
        }
        self.ticks += 1;
    }

    /// Walk a mark's path from the world root and set the plate's state.
    /// A stale path (entity removed, wrong node kind) drops the mark with
    /// a warning rather than corrupting a neighbour.
    fn apply_mark(&mut self, mark: PlateMark) {
        let Some((&root, rest)) = mark.path.split_first() else {
            warn!("plate mark with empty path dropped");
            return;
        };
        match self
            .nodes
            .get_mut(root)
            .and_then(|node| node.plate_at_mut(rest))
        {
            Some(plate) => plate.state = mark.state,
            None => warn!("plate mark path {:?} addresses no plate, dropped", mark.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::objects::{ArmourPlate, PlateState, Shell};
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    fn facing_plate(pos: DVec2) -> Node {
        Node::Plate(ArmourPlate::new(10.0, 1.0, 1.0, pos, FRAC_PI_2))
    }

    fn heavy_shell(pos: DVec2, vel: DVec2) -> Node {
        Node::Shell(Shell::spawn(pos, vel, 3000.0, 0.5, 1.0))
    }

    fn plate_state(node: &Node) -> PlateState {
        match node {
            Node::Plate(plate) => plate.state,
            other => panic!("expected a plate, got {:?}", other),
        }
    }

    #[test]
    fn test_step_advances_ticks_and_kinematics() {
        let mut drifting = ArmourPlate::new(4.0, 1.0, 1.0, DVec2::ZERO, 0.0);
        drifting.body.vel = DVec2::new(2.0, 0.0);
        drifting.body.spin = 1.0;
        let mut world = World::new(vec![Node::Plate(drifting)], SimConfig::default());

        world.step(0.5);
        world.step(0.5);

        assert_eq!(world.ticks(), 2);
        let body = world.nodes()[0].body();
        assert!((body.pos.x - 2.0).abs() < 1e-9);
        assert!((body.angle - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_resolves_shell_and_marks_plate() {
        let mut world = World::new(
            vec![
                facing_plate(DVec2::new(10.0, 0.0)),
                heavy_shell(DVec2::new(0.0, 0.0), DVec2::new(4000.0, 0.0)),
            ],
            SimConfig::default(),
        );

        world.step(0.01);

        assert_eq!(plate_state(&world.nodes()[0]), PlateState::Penetrated);
        let shell_body = world.nodes()[1].body();
        assert!(
            (shell_body.pos - DVec2::new(40.0, 0.0)).length() < 1e-9,
            "penetration does not divert the flight path, got {:?}",
            shell_body.pos
        );
        assert!(
            shell_body.vel.length() < 4000.0,
            "penetration bleeds speed, got {}",
            shell_body.vel.length()
        );
    }

    #[test]
    fn test_neighbour_offset_addresses_later_entities() {
        // Shell first in the list: the struck plate sits AFTER it, so the
        // mark path must account for the gap the updating entity leaves
        let mut world = World::new(
            vec![
                heavy_shell(DVec2::new(0.0, 0.0), DVec2::new(4000.0, 0.0)),
                facing_plate(DVec2::new(10.0, 0.0)),
            ],
            SimConfig::default(),
        );

        world.step(0.01);

        assert_eq!(plate_state(&world.nodes()[1]), PlateState::Penetrated);
    }

    #[test]
    fn test_deflection_visible_after_step() {
        let mut world = World::new(
            vec![
                facing_plate(DVec2::new(10.0, 0.0)),
                // Slow light shell: bounces off
                Node::Shell(Shell::spawn(
                    DVec2::new(0.0, 0.0),
                    DVec2::new(400.0, 0.0),
                    10.0,
                    0.5,
                    1.0,
                )),
            ],
            SimConfig::default(),
        );

        world.step(0.1);

        assert_eq!(plate_state(&world.nodes()[0]), PlateState::Deflected);
        assert!(
            world.nodes()[1].body().vel.x < 0.0,
            "shell flies back after bouncing off a facing plate"
        );
    }

    #[test]
    fn test_reset_replaces_entities_and_zeroes_ticks() {
        let mut world = World::new(
            vec![facing_plate(DVec2::new(10.0, 0.0))],
            SimConfig::default(),
        );
        world.step(0.01);
        assert_eq!(world.ticks(), 1);

        world.reset(vec![
            facing_plate(DVec2::new(5.0, 0.0)),
            facing_plate(DVec2::new(-5.0, 0.0)),
        ]);
        assert_eq!(world.ticks(), 0);
        assert_eq!(world.nodes().len(), 2);
    }

    #[test]
    fn test_empty_world_steps() {
        let mut world = World::new(Vec::new(), SimConfig::default());
        world.step(0.1);
        assert_eq!(world.ticks(), 1);
    }
}
