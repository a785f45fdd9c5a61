use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Board size must be at least 1")]
    InvalidSize,
}

pub type Result<T> = core::result::Result<T, GameError>;
