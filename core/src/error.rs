use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration, need a non-empty grid with at least one safe cell")]
    InvalidConfiguration,
    #[error("cell index out of range")]
    IndexOutOfRange,
}

pub type Result<T> = core::result::Result<T, GameError>;
