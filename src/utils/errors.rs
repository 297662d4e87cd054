use std::{io, path::PathBuf};
use thiserror::Error;

use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I can't {0} unless I takeoff first!")]
    NotAirborne(String),

    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    #[error("I can't tell which way to flip ('{0}'). Please use f, b, r, or l")]
    InvalidFlipDirection(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(String),
}

impl SimError {
    pub(crate) fn invalid_argument(command: &str, reason: impl Into<String>) -> Self {
        SimError::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}
