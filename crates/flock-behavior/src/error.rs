use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("steering configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
