use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Mystery effect collides with its trigger or the trigger's mirror")]
    RedundantRule,
    #[error("Session already ended, no new clicks are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
