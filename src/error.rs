use thiserror::Error;

/// Errors that can occur when driving the game engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("no round in progress; call start_new_game first")]
    NotStarted,
}
