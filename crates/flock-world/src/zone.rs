//! The disruptive zone: a movable circular field that scatters agents.

use flock_agent::AgentStore;
use flock_core::{SimRng, ZoneConfig};
use glam::Vec2;

/// A circular region that relocates any agent strictly inside its radius to
/// a uniformly random position, leaving velocity and every other attribute
/// untouched.
///
/// The center moves under held directional input and is deliberately never
/// clamped to the boundary — parking the zone off-screen is a supported way
/// of disabling it without toggling.
#[derive(Clone, Debug, PartialEq)]
pub struct DisruptiveZone {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub active: bool,
}

impl DisruptiveZone {
    /// Build from config; `default_center` is used when the config gives no
    /// explicit starting position.
    pub fn from_config(config: &ZoneConfig, default_center: Vec2) -> Self {
        Self {
            position: config.position.unwrap_or(default_center),
            radius:   config.radius,
            speed:    config.speed,
            active:   config.active,
        }
    }

    /// Move the center by `speed` along each held axis.  `axis_x`/`axis_y`
    /// are `-1.0`, `0.0`, or `+1.0` from the input snapshot.
    #[inline]
    pub fn shift(&mut self, axis_x: f32, axis_y: f32) {
        self.position += Vec2::new(axis_x, axis_y) * self.speed;
    }

    /// Flip the active flag.
    #[inline]
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// `true` if `p` is strictly inside the capture radius.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.position.distance(p) < self.radius
    }

    /// Relocate every captured agent to a random point in `[0,w] × [0,h]`,
    /// in ascending agent order (deterministic for a given RNG state).
    ///
    /// Returns the number of agents relocated.  Inactive zones relocate
    /// nothing.  Runs before the frame's force phase, so relocated agents
    /// flock from their new position the same frame.
    pub fn disrupt(
        &self,
        store: &mut AgentStore,
        boundary: &crate::Boundary,
        rng: &mut SimRng,
    ) -> usize {
        if !self.active {
            return 0;
        }
        let mut relocated = 0;
        for i in 0..store.count {
            if self.contains(store.position[i]) {
                store.position[i] = boundary.random_point(rng);
                relocated += 1;
            }
        }
        relocated
    }
}
