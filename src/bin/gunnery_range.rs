//! Gunnery Range
//!
//! Run with: `cargo run --bin gunnery-range -- --ticks 300 --json`
//!
//! Headless driver for the standard scenario: one armoured ship, one
//! incoming armour-piercing shell. Steps the world at the capped frame
//! rate's fixed delta, time-compressed by the simulation speed, then
//! reports every plate's fate and the shell's final kinematics.
//!
//! Flags:
//! - `--ticks N`: how many ticks to step (default 300)
//! - `--json`: machine-readable report instead of the human summary
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to watch
//! individual penetrations and ricochets as they resolve.

use std::process::ExitCode;

use glam::DVec2;
use log::{error, info};
use serde::Serialize;

use broadside_engine::game::config::{SimConfig, ViewConfig};
use broadside_engine::game::objects::{Node, PlateState};
use broadside_engine::game::scenario;
use broadside_engine::game::world::World;

// ============================================================================
// REPORT STRUCTURES
// ============================================================================

/// Everything a run produces, serialized verbatim with `--json`.
#[derive(Serialize)]
struct RunReport {
    ticks: u64,
    config: SimConfig,
    plates: Vec<PlateReport>,
    shells: Vec<ShellReport>,
}

#[derive(Serialize)]
struct PlateReport {
    /// Path from the world root, child indices at each level
    path: Vec<usize>,
    state: PlateState,
    thickness: f64,
}

#[derive(Serialize)]
struct ShellReport {
    pos: DVec2,
    vel: DVec2,
    speed: f64,
}

// ============================================================================
// ARGUMENTS
// ============================================================================

struct Args {
    ticks: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        ticks: 300,
        json: false,
    };
    let mut rest = std::env::args().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = rest.next().ok_or("--ticks needs a number")?;
                args.ticks = value
                    .parse()
                    .map_err(|_| format!("bad tick count: {value}"))?;
            }
            "--json" => args.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

// ============================================================================
// REPORT COLLECTION
// ============================================================================

fn collect_plates(nodes: &[Node]) -> Vec<PlateReport> {
    fn walk(node: &Node, path: &mut Vec<usize>, out: &mut Vec<PlateReport>) {
        if let Node::Plate(plate) = node {
            out.push(PlateReport {
                path: path.clone(),
                state: plate.state,
                thickness: plate.thickness,
            });
        }
        for (index, child) in node.body().children.iter().enumerate() {
            path.push(index);
            walk(child, path, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    let mut path = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        walk(node, &mut path, &mut out);
        path.pop();
    }
    out
}

fn collect_shells(nodes: &[Node]) -> Vec<ShellReport> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Shell(shell) => Some(ShellReport {
                pos: shell.body.pos,
                vel: shell.body.vel,
                speed: shell.body.vel.length(),
            }),
            _ => None,
        })
        .collect()
}

fn print_summary(report: &RunReport) {
    println!("after {} ticks:", report.ticks);
    let mut intact = 0usize;
    for plate in &report.plates {
        match plate.state {
            PlateState::Intact => intact += 1,
            PlateState::Penetrated => println!(
                "  plate {:?} ({} thick) penetrated",
                plate.path, plate.thickness
            ),
            PlateState::Deflected => println!(
                "  plate {:?} ({} thick) deflected the shell",
                plate.path, plate.thickness
            ),
        }
    }
    println!("  {intact} plates untouched");
    for shell in &report.shells {
        println!(
            "  shell at ({:.1}, {:.1}), {:.0} units/s on heading ({:.1}, {:.1})",
            shell.pos.x, shell.pos.y, shell.speed, shell.vel.x, shell.vel.y
        );
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: gunnery-range [--ticks N] [--json]");
            return ExitCode::FAILURE;
        }
    };

    let nodes = match scenario::initial_state() {
        Ok(nodes) => nodes,
        Err(err) => {
            error!("scenario failed to build: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = SimConfig::default();
    let view = ViewConfig::default();
    // Fixed frame delta at the capped rate, time-compressed
    let dt = (1.0 / f64::from(view.fps_cap)) * config.sim_speed;
    let mut world = World::new(nodes, config);

    info!("stepping {} ticks at dt {:.6}", args.ticks, dt);
    for _ in 0..args.ticks {
        world.step(dt);
    }

    let report = RunReport {
        ticks: world.ticks(),
        config: world.config.clone(),
        plates: collect_plates(world.nodes()),
        shells: collect_shells(world.nodes()),
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("report serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&report);
    }
    ExitCode::SUCCESS
}
