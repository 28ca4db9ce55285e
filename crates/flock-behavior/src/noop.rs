//! A steering model that never steers.

use flock_core::AgentId;
use glam::Vec2;

use crate::{FrameContext, SteeringModel};

/// Produces no steering at all: agents drift on their spawn heading forever
/// (subject only to boundary wrap).  Useful as a driver-test stand-in and as
/// the simplest possible `SteeringModel` example.
pub struct NoSteering;

impl SteeringModel for NoSteering {
    fn steer(&self, _agent: AgentId, _ctx: &FrameContext<'_>) -> Vec2 {
        Vec2::ZERO
    }
}
