//! View model: flat, data-only description of a frame
//!
//! The simulation never touches a pixel surface. Each frame the renderer
//! asks for a [`render_list`]: the entity tree flattened into world-space
//! shapes with flat RGB colours, ordered back to front (children under
//! parents, a ship's hull over its plating). A [`Viewport`] then projects
//! shapes to the screen and culls the ones that cannot touch it.
//!
//! Plate colours encode combat history: blue intact, red penetrated,
//! green deflected. A ship too small on screen to read collapses to a
//! heading triangle instead of its real outline.

use glam::DVec2;
use serde::Serialize;

use crate::game::config::ViewConfig;
use crate::game::objects::{Body, Node, PlateState, Pose};
use crate::game::world::World;
use crate::physics::geometry::Aabb;
use crate::physics::vec2::rotate;

/// Flat 8-bit RGB.
pub type Colour = [u8; 3];

/// Ship hull fill.
pub const SHIP_COLOUR: Colour = [0, 0, 255];
/// Shell disc fill.
pub const SHELL_COLOUR: Colour = [255, 255, 0];

/// The colour a plate renders with in each collision state.
pub fn state_colour(state: PlateState) -> Colour {
    match state {
        PlateState::Intact => [0, 0, 255],
        PlateState::Penetrated => [255, 0, 0],
        PlateState::Deflected => [0, 255, 0],
    }
}

/// World-space geometry of one drawable.
#[derive(Debug, Clone, Serialize)]
pub enum ShapeData {
    /// Filled polygon over world-space vertices
    Polygon(Vec<DVec2>),
    /// Filled disc
    Disc { centre: DVec2, radius: f64 },
}

/// One drawable: shape plus fill colour. Items are emitted in paint
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct RenderItem {
    pub shape: ShapeData,
    pub colour: Colour,
}

/// Flatten the world into paint-ordered drawables.
pub fn render_list(world: &World, view: &ViewConfig) -> Vec<RenderItem> {
    let mut items = Vec::new();
    for node in world.nodes() {
        flatten_node(node, Pose::IDENTITY, view, &mut items);
    }
    items
}

fn flatten_node(node: &Node, parent: Pose, view: &ViewConfig, out: &mut Vec<RenderItem>) {
    match node {
        Node::Plate(plate) => {
            let pose = plate.body.pose_in(parent);
            flatten_children(&plate.body, pose, view, out);
            out.push(RenderItem {
                shape: ShapeData::Polygon(plate.corners(pose).to_vec()),
                colour: state_colour(plate.state),
            });
        }
        Node::Ship(ship) => {
            let pose = ship.body.pose_in(parent);
            if let Some(dims) = node.bounds(parent).map(|bounds| bounds.dims()) {
                if dims.min_element() * view.scale < view.min_icon_dim {
                    // Too small to read: a heading triangle sized in
                    // pixels, placed in world units
                    let (length, width) = icon_dims(dims, view.min_icon_dim);
                    out.push(RenderItem {
                        shape: ShapeData::Polygon(
                            icon_triangle(pose, length / view.scale, width / view.scale).to_vec(),
                        ),
                        colour: SHIP_COLOUR,
                    });
                    return;
                }
            }
            flatten_children(&ship.body, pose, view, out);
            out.push(RenderItem {
                shape: ShapeData::Polygon(ship.points(pose)),
                colour: SHIP_COLOUR,
            });
        }
        Node::Shell(shell) => {
            let pose = shell.body.pose_in(parent);
            flatten_children(&shell.body, pose, view, out);
            out.push(RenderItem {
                shape: ShapeData::Disc {
                    centre: pose.pos,
                    radius: shell.diameter * 0.5,
                },
                colour: SHELL_COLOUR,
            });
        }
    }
}

fn flatten_children(body: &Body, pose: Pose, view: &ViewConfig, out: &mut Vec<RenderItem>) {
    for child in &body.children {
        flatten_node(child, pose, view, out);
    }
}

/// Icon dimensions in pixels from a world-space extent: the short side
/// pins to `min_dim`, the long side keeps the aspect ratio. Callers
/// guarantee a nonzero extent.
pub fn icon_dims(dims: DVec2, min_dim: f64) -> (f64, f64) {
    if dims.x > dims.y {
        (dims.x / dims.y * min_dim, min_dim)
    } else {
        (min_dim, dims.y / dims.x * min_dim)
    }
}

/// The heading triangle: nose two-thirds of the length ahead of the
/// pose, base a third behind.
pub fn icon_triangle(pose: Pose, length: f64, width: f64) -> [DVec2; 3] {
    let verts = [
        DVec2::new(2.0 / 3.0 * length, 0.0),
        DVec2::new(-length / 3.0, width * 0.5),
        DVec2::new(-length / 3.0, -width * 0.5),
    ];
    verts.map(|v| pose.pos + rotate(v, pose.angle))
}

/// Projection from world space onto a fixed pixel surface, world origin
/// at the surface centre, y flipped to pixel convention.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scale: f64,
    pub screen_w: f64,
    pub screen_h: f64,
}

impl Viewport {
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            scale: config.scale,
            screen_w: f64::from(config.screen_w),
            screen_h: f64::from(config.screen_h),
        }
    }

    /// World position to pixel position.
    #[inline]
    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        DVec2::new(
            self.screen_w * 0.5 + world.x * self.scale,
            self.screen_h * 0.5 - world.y * self.scale,
        )
    }

    /// Is a pixel position within the surface, allowing `margin` pixels
    /// of slack on every side? Boundaries count as on.
    pub fn on_screen(&self, screen: DVec2, margin: f64) -> bool {
        -margin <= screen.x
            && screen.x <= self.screen_w + margin
            && -margin <= screen.y
            && screen.y <= self.screen_h + margin
    }

    /// Cheap cull test for a drawable. Polygons test their first vertex
    /// with the projected bounding dimension as margin; discs test their
    /// centre with the world radius as margin.
    pub fn is_visible(&self, item: &RenderItem) -> bool {
        match &item.shape {
            ShapeData::Polygon(points) => {
                let screen: Vec<DVec2> = points.iter().map(|&p| self.to_screen(p)).collect();
                match (screen.first(), Aabb::from_points(&screen)) {
                    (Some(&first), Some(bounds)) => {
                        self.on_screen(first, bounds.dims().max_element())
                    }
                    _ => false,
                }
            }
            ShapeData::Disc { centre, radius } => self.on_screen(self.to_screen(*centre), *radius),
        }
    }
}
