use flock_behavior::BehaviorError;
use flock_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Core(#[from] FlockError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
