//! The assembled world: boundary + motion + optional disruptive zone.

use flock_agent::AgentStore;
use flock_core::{FlockConfig, FlockResult, SimRng};

use crate::{Boundary, DisruptiveZone, MotionEngine};

/// Everything outside the agent store that the frame loop touches.
///
/// `boundary` and `motion` are immutable after construction; `zone` is the
/// one piece of mutable world state, and only the driver's input-handling
/// step writes to it.
pub struct World {
    pub boundary: Boundary,
    pub motion: MotionEngine,
    pub zone: Option<DisruptiveZone>,
}

impl World {
    /// Assemble boundary, motion engine, and zone from a config.
    ///
    /// # Errors
    ///
    /// Returns `FlockError::Config` for a non-positive boundary.
    pub fn from_config(config: &FlockConfig) -> FlockResult<Self> {
        let boundary = Boundary::new(config.width, config.height)?;
        let zone = config
            .zone
            .as_ref()
            .map(|z| DisruptiveZone::from_config(z, boundary.center()));
        Ok(Self {
            boundary,
            motion: MotionEngine::new(config.max_speed),
            zone,
        })
    }

    /// Route an input snapshot to the zone: toggle first, then movement.
    /// No-op when the zone feature is disabled.
    pub fn steer_zone(&mut self, toggle: bool, axis_x: f32, axis_y: f32) {
        if let Some(zone) = &mut self.zone {
            if toggle {
                zone.toggle();
            }
            zone.shift(axis_x, axis_y);
        }
    }

    /// Run the zone's relocation pass.  Returns the number of agents moved
    /// (zero when the zone is absent or inactive).
    pub fn disrupt(&self, store: &mut AgentStore, rng: &mut SimRng) -> usize {
        match &self.zone {
            Some(zone) => zone.disrupt(store, &self.boundary, rng),
            None       => 0,
        }
    }

    /// Run the per-frame motion pass (integrate + wrap) over all agents.
    #[inline]
    pub fn step_motion(&self, store: &mut AgentStore) {
        self.motion.step(store, &self.boundary);
    }
}
