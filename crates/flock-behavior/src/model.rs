//! The `SteeringModel` trait — the main extension point for user code.

use flock_core::AgentId;
use glam::Vec2;

use crate::FrameContext;

/// Pluggable per-agent steering.
///
/// Implement this trait to define how agents steer each frame.  The method
/// receives a read-only [`FrameContext`] and returns the acceleration delta
/// to apply to the agent — already scaled by whatever turning/weighting rule
/// the model uses.  The driver accumulates the delta into the agent's
/// acceleration during the apply phase.
///
/// # Thread safety
///
/// The simulation loop may call `steer` for many agents in parallel via
/// Rayon, so implementations must be `Send + Sync` and must not mutate shared
/// state.  Per-agent state belongs in `AgentStore` (accessed read-only
/// through `ctx.agents`), not in the model itself.
///
/// # Example
///
/// ```rust,ignore
/// /// Constant drift to the right, ignoring all neighbors.
/// struct Wind;
///
/// impl SteeringModel for Wind {
///     fn steer(&self, _agent: AgentId, _ctx: &FrameContext<'_>) -> Vec2 {
///         Vec2::new(0.1, 0.0)
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    /// Called once per agent per frame during the force phase.
    ///
    /// Returning `Vec2::ZERO` means "no steering this frame"; the agent
    /// continues on its prior heading.
    fn steer(&self, agent: AgentId, ctx: &FrameContext<'_>) -> Vec2;
}
