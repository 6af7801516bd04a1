use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0:?} (expected Rock, Paper or Scissors)")]
    InvalidMove(String),

    #[error("Invalid result: {0:?}")]
    InvalidOutcome(String),
}
