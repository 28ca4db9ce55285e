//! The classic flocking rules: cohesion, alignment, separation, and
//! cross-group avoidance over a naive all-pairs neighbor scan.
//!
//! # Movement model
//!
//! Each frame, every agent scans all other agents:
//!
//! - **Same group**, within `perception_radius`: the neighbor's position and
//!   velocity feed running means; within `separation_radius` it additionally
//!   contributes a push-away vector.
//! - **Different group**, within `avoidance_radius`: the neighbor contributes
//!   a scaled push-away vector to a separate avoidance sum.
//!
//! After the scan, mean-based cohesion/alignment and the separation sum are
//! combined into one steering force; the avoidance sum is applied as a
//! distinct force.  Both go through the same application rule:
//!
//! `acceleration += force * turning_factor * weight`
//!
//! where `weight` is `1` or `0.5 + attractiveness` depending on
//! [`Weighting`].  All radius comparisons are strict (`<`): boundary-exact
//! distance counts as out of range.
//!
//! The scan is O(n²) per frame — fine for the target scale of a few hundred
//! agents.  A reimplementation targeting much larger populations should swap
//! a uniform grid in here without changing the synthesis contract.

use flock_agent::AgentStore;
use flock_core::{AgentId, FlockConfig, Weighting};
use glam::Vec2;

use crate::{BehaviorError, BehaviorResult, FrameContext, SteeringModel};

// ── SteeringParams ────────────────────────────────────────────────────────────

/// Tuning parameters for [`ClassicFlocking`].
///
/// Usually built with [`from_config`][Self::from_config]; constructed
/// directly only in tests that probe individual rules.
#[derive(Clone, Debug, PartialEq)]
pub struct SteeringParams {
    /// Same-group sensing radius for cohesion and alignment.
    pub perception_radius: f32,
    /// Same-group radius for the push-away rule.  Checked only inside the
    /// perception radius, so values above `perception_radius` saturate.
    pub separation_radius: f32,
    /// Cross-group sensing radius.
    pub avoidance_radius: f32,

    /// Gain on `(mean neighbor position - own position)`.
    pub cohesion_gain: f32,
    /// Gain on `(mean neighbor velocity - own velocity)`.
    pub alignment_gain: f32,
    /// Gain on the accumulated separation vector.
    pub separation_gain: f32,
    /// Per-pair gain applied while accumulating avoidance.
    pub avoidance_gain: f32,

    /// Global scale on every applied force.
    pub turning_factor: f32,
    /// Uniform or size-weighted application.
    pub weighting: Weighting,
}

impl SteeringParams {
    /// Lift the steering-related fields out of a [`FlockConfig`].
    pub fn from_config(config: &FlockConfig) -> Self {
        Self {
            perception_radius: config.perception_radius,
            separation_radius: config.separation_radius,
            avoidance_radius:  config.avoidance_radius,
            cohesion_gain:     config.cohesion_gain,
            alignment_gain:    config.alignment_gain,
            separation_gain:   config.separation_gain,
            avoidance_gain:    config.avoidance_gain,
            turning_factor:    config.turning_factor,
            weighting:         config.weighting,
        }
    }

    /// Reject parameter sets the scan cannot interpret.
    pub fn validate(&self) -> BehaviorResult<()> {
        for (name, radius) in [
            ("perception_radius", self.perception_radius),
            ("separation_radius", self.separation_radius),
            ("avoidance_radius", self.avoidance_radius),
        ] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(BehaviorError::Config(format!(
                    "{name} must be finite and non-negative, got {radius}"
                )));
            }
        }
        Ok(())
    }

    /// The per-agent application scale.
    #[inline]
    fn weight(&self, attractiveness: f32) -> f32 {
        let base = match self.weighting {
            Weighting::Uniform      => 1.0,
            Weighting::SizeWeighted => 0.5 + attractiveness,
        };
        self.turning_factor * base
    }
}

// ── SteeringBreakdown ─────────────────────────────────────────────────────────

/// The individual force components produced by one agent's neighbor scan,
/// before the turning/weighting scale is applied.
///
/// Exposed so tests and tooling can assert on each rule in isolation; the
/// driver only ever sees the combined [`steer`][SteeringModel::steer] result.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteeringBreakdown {
    /// `(mean same-group neighbor position - own position) * cohesion_gain`,
    /// or zero with no neighbors in perception range.
    pub cohesion: Vec2,
    /// `(mean same-group neighbor velocity - own velocity) * alignment_gain`,
    /// or zero with no neighbors in perception range.
    pub alignment: Vec2,
    /// Accumulated push-away from same-group neighbors inside the separation
    /// radius, times `separation_gain`.
    pub separation: Vec2,
    /// Accumulated scaled push-away from different-group neighbors inside the
    /// avoidance radius.
    pub avoidance: Vec2,

    /// Same-group neighbors inside the perception radius.
    pub same_group_neighbors: u32,
    /// Same-group neighbors additionally inside the separation radius.
    pub separation_neighbors: u32,
    /// Different-group neighbors inside the avoidance radius.
    pub cross_group_neighbors: u32,
}

// ── ClassicFlocking ───────────────────────────────────────────────────────────

/// The standard four-rule flocking model.
pub struct ClassicFlocking {
    params: SteeringParams,
}

impl ClassicFlocking {
    /// # Errors
    ///
    /// Returns `BehaviorError::Config` for non-finite or negative radii.
    pub fn new(params: SteeringParams) -> BehaviorResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Convenience constructor from a full [`FlockConfig`].
    pub fn from_config(config: &FlockConfig) -> BehaviorResult<Self> {
        Self::new(SteeringParams::from_config(config))
    }

    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// Run the all-pairs neighbor scan for `agent` and synthesize the
    /// unscaled force components.
    ///
    /// Zero-neighbor cases yield zero components — a valid steady state, not
    /// an error.
    pub fn survey(&self, agent: AgentId, store: &AgentStore) -> SteeringBreakdown {
        let p = &self.params;
        let i = agent.index();
        let own_pos = store.position[i];
        let own_vel = store.velocity[i];
        let own_group = store.group[i];

        let mut pos_sum = Vec2::ZERO;
        let mut vel_sum = Vec2::ZERO;
        let mut sep_sum = Vec2::ZERO;
        let mut avoid_sum = Vec2::ZERO;
        let mut same = 0u32;
        let mut sep_n = 0u32;
        let mut cross = 0u32;

        for j in 0..store.count {
            if j == i {
                continue;
            }
            let other_pos = store.position[j];
            let d = own_pos.distance(other_pos);

            if store.group[j] == own_group {
                if d < p.perception_radius {
                    pos_sum += other_pos;
                    vel_sum += store.velocity[j];
                    same += 1;

                    if d < p.separation_radius {
                        sep_sum += own_pos - other_pos;
                        sep_n += 1;
                    }
                }
            } else if d < p.avoidance_radius {
                avoid_sum += (own_pos - other_pos) * p.avoidance_gain;
                cross += 1;
            }
        }

        let mut out = SteeringBreakdown {
            same_group_neighbors:  same,
            separation_neighbors:  sep_n,
            cross_group_neighbors: cross,
            ..Default::default()
        };

        if same > 0 {
            let mean_pos = pos_sum / same as f32;
            let mean_vel = vel_sum / same as f32;
            out.cohesion  = (mean_pos - own_pos) * p.cohesion_gain;
            out.alignment = (mean_vel - own_vel) * p.alignment_gain;
        }
        if sep_n > 0 {
            out.separation = sep_sum * p.separation_gain;
        }
        if cross > 0 {
            out.avoidance = avoid_sum;
        }

        out
    }
}

impl SteeringModel for ClassicFlocking {
    fn steer(&self, agent: AgentId, ctx: &FrameContext<'_>) -> Vec2 {
        let forces = self.survey(agent, ctx.agents);
        let weight = self.params.weight(ctx.agents.attractiveness[agent.index()]);

        // Avoidance is applied as its own force, distinct from the combined
        // flocking force, but through the same scaled-application rule.
        let mut delta = Vec2::ZERO;
        if forces.cross_group_neighbors > 0 {
            delta += forces.avoidance * weight;
        }
        delta += (forces.alignment + forces.cohesion + forces.separation) * weight;
        delta
    }
}
