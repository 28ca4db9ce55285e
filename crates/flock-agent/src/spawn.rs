//! Randomized population construction.
//!
//! The spawner is the only place agent identity is decided: position, color
//! (and therefore group), heading, and body size are all drawn from the
//! sequential [`SimRng`] in one pass over ascending agent indices, so a given
//! config + seed always produces the same population.

use std::f32::consts::TAU;

use flock_core::{ColorId, FlockConfig, FlockResult, GroupId, SimRng};
use glam::Vec2;

use crate::AgentStore;

/// Fills an [`AgentStore`] from a validated [`FlockConfig`].
///
/// # Spawn rules
///
/// - `position`: uniform over the boundary rectangle.
/// - `color`: uniform over all `num_groups * gradation_levels` palette
///   entries; `group = color / gradation_levels`.
/// - `velocity`: uniform random heading at magnitude exactly `max_speed`.
/// - `size`: uniform choice from [`FlockConfig::body_sizes`].
/// - `attractiveness`: `(size - min) / (max - min)`, or `0.0` for every
///   agent when all sizes are equal (guarded denominator).
pub struct AgentSpawner<'a> {
    config: &'a FlockConfig,
}

impl<'a> AgentSpawner<'a> {
    pub fn new(config: &'a FlockConfig) -> Self {
        Self { config }
    }

    /// Build and populate the store.
    ///
    /// # Errors
    ///
    /// Returns `FlockError::Config` if the config fails validation.
    pub fn spawn(&self, rng: &mut SimRng) -> FlockResult<AgentStore> {
        let cfg = self.config;
        cfg.validate()?;

        let sizes = cfg.body_sizes();
        let size_min = sizes[0];
        let size_max = sizes[sizes.len() - 1];
        let size_span = size_max - size_min;

        let levels = cfg.gradation_levels;
        let palette_len = cfg.palette_len() as u16;

        let mut store = AgentStore::with_count(cfg.agent_count);
        for i in 0..cfg.agent_count {
            store.position[i] = Vec2::new(
                rng.gen_range(0.0..=cfg.width),
                rng.gen_range(0.0..=cfg.height),
            );

            let color = ColorId(rng.gen_range(0..palette_len));
            store.color[i] = color;
            store.group[i] = GroupId(color.0 / levels);

            let angle = rng.gen_range(0.0..TAU);
            store.velocity[i] = Vec2::from_angle(angle) * cfg.max_speed;

            // choose() only fails on an empty slice; body_sizes() is never empty.
            let size = *rng.choose(&sizes).unwrap_or(&size_min);
            store.size[i] = size;
            store.attractiveness[i] = if size_span > 0.0 {
                (size - size_min) / size_span
            } else {
                0.0
            };
        }

        Ok(store)
    }
}
