//! Error types for Rollbuf

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbufError {
    #[error("Failed to load env file '{path}': {reason}")]
    EnvLoad { path: String, reason: String },

    #[error("Env file '{0}' ends inside a multi-line comment")]
    UnterminatedComment(String),

    #[error("Env key '{0}' not found")]
    MissingKey(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid capacity {0}: capacity must be at least 1")]
    InvalidCapacity(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Env hook rejected its changes")]
    HookRejected,
}

pub type Result<T> = std::result::Result<T, RollbufError>;
