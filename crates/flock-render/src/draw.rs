//! Per-agent draw records and triangle geometry.

use flock_agent::AgentStore;
use glam::Vec2;

use crate::{Palette, Rgb};

/// Angular offset of the two base vertices from the heading, in radians.
/// ±2.5 rad puts them behind and to either side of the apex, giving the
/// classic arrowhead silhouette.
const WING_ANGLE: f32 = 2.5;

/// Everything a renderer needs to draw one agent for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Agent position (triangle centroid anchor).
    pub position: Vec2,
    /// Heading in radians, `atan2(velocity.y, velocity.x)`.
    pub heading: f32,
    /// Triangle scale: apex sits this far from `position`.
    pub size: f32,
    /// Fill color from the palette.
    pub color: Rgb,
}

impl DrawCommand {
    /// The triangle's vertices: apex along the heading at distance `size`,
    /// two base vertices at ±[`WING_ANGLE`] offsets at distance `size / 2`.
    pub fn triangle(&self) -> [Vec2; 3] {
        let apex = self.position + Vec2::from_angle(self.heading) * self.size;
        let left = self.position + Vec2::from_angle(self.heading + WING_ANGLE) * (self.size * 0.5);
        let right = self.position + Vec2::from_angle(self.heading - WING_ANGLE) * (self.size * 0.5);
        [apex, left, right]
    }
}

/// Build one frame's draw records, one per agent in ascending order.
pub fn frame_commands(store: &AgentStore, palette: &Palette) -> Vec<DrawCommand> {
    store
        .agent_ids()
        .map(|agent| DrawCommand {
            position: store.position[agent.index()],
            heading:  store.heading(agent),
            size:     store.size[agent.index()],
            color:    palette.color(store.color[agent.index()]),
        })
        .collect()
}
