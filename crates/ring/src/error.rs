use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("ring has no nodes")]
    Empty,

    #[error("ring capacity must be greater than zero")]
    InvalidCapacity,
}
