//! Core agent storage: the `AgentStore` SoA arena.

use flock_core::{AgentId, ColorId, GroupId};
use glam::Vec2;

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// The kinematic arrays (`position`, `velocity`, `acceleration`) are mutated
/// every frame by the motion pass; everything else is fixed at spawn time.
///
/// # Invariants
///
/// - `|velocity| <= max_speed` after every integration step.
/// - `position` lies within `[0, width] × [0, height]` after the wrap step.
/// - `acceleration` is zero at the start of each frame's force phase.
/// - `group`, `color`, `size`, and `attractiveness` never change after spawn.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state (mutated every frame) ─────────────────────────────
    /// Current position.
    pub position: Vec<Vec2>,
    /// Current velocity.
    pub velocity: Vec<Vec2>,
    /// Per-frame force accumulator.  Reset to zero by integration.
    pub acceleration: Vec<Vec2>,

    // ── Identity (fixed at spawn) ─────────────────────────────────────────
    /// Flocking group.  Same-group neighbors cohere/align/separate;
    /// different groups avoid.
    pub group: Vec<GroupId>,
    /// Palette index.  The group is derived: `group = color / levels`.
    pub color: Vec<ColorId>,
    /// Drawn triangle scale, from the configured body-size set.
    pub size: Vec<f32>,
    /// Derived scalar in `[0, 1]` from `size` relative to the size range;
    /// scales force application under size-weighted steering.
    pub attractiveness: Vec<f32>,
}

impl AgentStore {
    /// Allocate a store of `count` agents with zeroed kinematics and
    /// sentinel identity values.  Used by [`AgentSpawner`][crate::AgentSpawner],
    /// which fills in actual values; exposed for tests that build populations
    /// by hand.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            position:       vec![Vec2::ZERO; count],
            velocity:       vec![Vec2::ZERO; count],
            acceleration:   vec![Vec2::ZERO; count],
            group:          vec![GroupId::INVALID; count],
            color:          vec![ColorId::INVALID; count],
            size:           vec![0.0_f32; count],
            attractiveness: vec![0.0_f32; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Heading angle in radians, derived from velocity (`atan2(vy, vx)`).
    ///
    /// A zero velocity yields `0.0` (pointing along +x), matching `atan2`.
    #[inline]
    pub fn heading(&self, agent: AgentId) -> f32 {
        let v = self.velocity[agent.index()];
        v.y.atan2(v.x)
    }

    /// Current speed of `agent`.
    #[inline]
    pub fn speed(&self, agent: AgentId) -> f32 {
        self.velocity[agent.index()].length()
    }
}
