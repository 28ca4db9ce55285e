//! Read-only frame state passed to every steering callback.

use flock_agent::AgentStore;
use flock_core::Tick;

/// A read-only snapshot of the simulation state passed to every
/// [`SteeringModel`][crate::SteeringModel] call.
///
/// `FrameContext` is built once per frame by flock-sim and shared (immutably)
/// across all agent callbacks during the force phase.  Every agent's steering
/// decision therefore observes the same end-of-previous-frame positions and
/// velocities — never a partially updated current frame.
///
/// # Lifetimes
///
/// All borrows live for the duration of one frame's force phase.  flock-sim
/// never allows mutable access to the store while `FrameContext` is live.
pub struct FrameContext<'a> {
    /// Current frame.
    pub tick: Tick,

    /// Read-only view of every agent's SoA state arrays.
    pub agents: &'a AgentStore,
}

impl<'a> FrameContext<'a> {
    /// Build a new context for a single frame.
    #[inline]
    pub fn new(tick: Tick, agents: &'a AgentStore) -> Self {
        Self { tick, agents }
    }
}
