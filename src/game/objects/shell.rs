//! Shells: fast point projectiles and the sweep resolver
//!
//! A shell covers enough ground in one tick to pass clean through a hull,
//! so it cannot be collided as a body at rest. Its update instead sweeps
//! the tick's travel segment through every plate in the world and resolves
//! the crossings nearest-first:
//!
//! - penetration bleeds speed and keeps checking the SAME segment, so one
//!   sweep can punch through several plates, each one harder to defeat
//!   than the last;
//! - deflection halves speed, mirrors the remaining travel off the plate
//!   face, and restarts the sweep along the new ray, so ricochets chain
//!   within a single tick.
//!
//! Hit ordering uses Manhattan distance from the segment start, a cheap
//! approximation the outcomes are calibrated against. Ricochet chains are
//! cut off after [`SimConfig::max_ricochets`] bounces; without a bound a
//! near-parallel reflective corridor could keep the resolver spinning
//! forever.

use glam::DVec2;
use log::{debug, warn};

use crate::game::config::SimConfig;
use crate::physics::geometry::Segment;
use crate::physics::penetration::{
    DEFLECTION_SPEED_FACTOR, RESTRIKE_NUDGE, bleed_factor, effective_depth, mirror_direction,
    penetration_capability,
};
use crate::physics::vec2::{cartesian_to_polar, polar_to_cartesian};

use super::armour::PlateState;
use super::body::{Body, PlatePath, Pose, Strike};
use super::{Neighbours, Node, PlateMark};

/// An armour-piercing shell.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Kinematics; the mass feeds the penetration formula
    pub body: Body,
    /// Calibre
    pub diameter: f64,
    /// Armour-piercing quality factor k
    pub coefficient: f64,
}

impl Shell {
    /// Shell in flight.
    ///
    /// # Arguments
    /// * `pos` - Starting position (world space)
    /// * `vel` - Velocity (units/second)
    /// * `mass` - Shell mass
    /// * `diameter` - Calibre
    /// * `coefficient` - Armour-piercing quality factor k
    pub fn spawn(pos: DVec2, vel: DVec2, mass: f64, diameter: f64, coefficient: f64) -> Self {
        let mut body = Body::at(pos, 0.0);
        body.vel = vel;
        body.mass = mass;
        Self {
            body,
            diameter,
            coefficient,
        }
    }

    /// One tick of flight: sweep the travel segment through the
    /// neighbouring entities and resolve every strike on the way.
    ///
    /// Plate state changes are reported through `marks` rather than
    /// applied here; the world applies them as soon as this update
    /// returns. Only the shell's own position and velocity are mutated.
    pub fn update(
        &mut self,
        dt: f64,
        neighbours: &Neighbours<'_>,
        marks: &mut Vec<PlateMark>,
        config: &SimConfig,
    ) {
        let mut segment = Segment::new(self.body.pos, self.body.pos + self.body.vel * dt);
        let mut ricochets = 0usize;

        'sweep: loop {
            let strikes = collect_strikes(segment, neighbours);

            // Travel metrics are fixed for this segment: r1 the full
            // travel distance, a1 the heading
            let (r1, a1) = cartesian_to_polar(segment.end - segment.start);

            for strike in &strikes {
                let speed = self.body.vel.length();
                let pen =
                    penetration_capability(speed, self.body.mass, self.coefficient, self.diameter);
                let depth = effective_depth(
                    strike.length,
                    strike.thickness,
                    strike.density,
                    strike.pose.angle,
                    a1,
                );

                if pen > depth {
                    // Through the plate: bleed speed, keep sweeping the
                    // same segment against the remaining strikes
                    debug!(
                        "shell through plate {:?}: pen {:.3} > depth {:.3}",
                        strike.plate, pen, depth
                    );
                    marks.push(PlateMark {
                        path: strike.plate.clone(),
                        state: PlateState::Penetrated,
                    });
                    self.body.vel *= bleed_factor(pen, depth);
                    continue;
                }

                // Deflected: mirror the heading off the plate face and
                // spend the rest of the travel along the new ray
                marks.push(PlateMark {
                    path: strike.plate.clone(),
                    state: PlateState::Deflected,
                });
                let r2 = (strike.point - segment.start).length();
                let a_new = mirror_direction(strike.pose.angle, a1);
                let v_new = polar_to_cartesian(speed, a_new);
                self.body.vel = v_new * DEFLECTION_SPEED_FACTOR;
                debug!(
                    "shell deflected off plate {:?}: pen {:.3} <= depth {:.3}, heading {:.3}",
                    strike.plate, pen, depth, a_new
                );

                if ricochets >= config.max_ricochets {
                    warn!(
                        "shell exceeded {} ricochets in one tick, parking at impact point",
                        config.max_ricochets
                    );
                    self.body.pos = strike.point;
                    return;
                }
                ricochets += 1;

                // The new segment leaves the impact point nudged a hair
                // along the full-speed velocity so it cannot immediately
                // re-strike the face it just left; its reach is whatever
                // travel was left on the old segment
                segment = Segment::new(
                    strike.point + v_new * (RESTRIKE_NUDGE * dt),
                    strike.point + polar_to_cartesian(r1 - r2, a_new),
                );
                continue 'sweep;
            }

            // No deflection during this pass; the segment is spent
            self.body.pos = segment.end;
            return;
        }
    }
}

/// Manhattan distance between two points.
#[inline]
fn manhattan(a: DVec2, b: DVec2) -> f64 {
    let d = (a - b).abs();
    d.x + d.y
}

/// Every plate crossing of `query` among the neighbouring entities,
/// nearest first by Manhattan distance from the query start. Other shells
/// never collide. The sort is stable, so equidistant strikes keep world
/// tree order.
fn collect_strikes(query: Segment, neighbours: &Neighbours<'_>) -> Vec<Strike> {
    let mut strikes = Vec::new();
    let mut path = PlatePath::new();
    for (index, node) in neighbours.iter_indexed() {
        if matches!(node, Node::Shell(_)) {
            continue;
        }
        path.push(index);
        node.intersect_segment(query, Pose::IDENTITY, &mut path, &mut strikes);
        path.pop();
    }
    strikes.sort_by(|a, b| {
        manhattan(a.point, query.start).total_cmp(&manhattan(b.point, query.start))
    });
    strikes
}
