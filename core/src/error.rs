use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Paddle cannot move past the board edge")]
    PaddleOutOfRange,
    #[error("Unknown board layout {0}")]
    UnknownLayout(u8),
    #[error("Block layout does not match the play area")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
