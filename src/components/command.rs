use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::SimError;

/// A primitive positional argument as it appears in a persisted log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandArg {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl CommandArg {
    /// Human readable type name, used in argument diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandArg::Int(_) => "integer",
            CommandArg::Float(_) => "float",
            CommandArg::Text(_) => "string",
            CommandArg::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandArg::Int(v) => write!(f, "{}", v),
            CommandArg::Float(v) => write!(f, "{}", v),
            CommandArg::Text(v) => write!(f, "{}", v),
            CommandArg::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for CommandArg {
    fn from(value: i64) -> Self {
        CommandArg::Int(value)
    }
}

impl From<&str> for CommandArg {
    fn from(value: &str) -> Self {
        CommandArg::Text(value.to_string())
    }
}

impl From<FlipDirection> for CommandArg {
    fn from(value: FlipDirection) -> Self {
        CommandArg::Text(value.as_str().to_string())
    }
}

/// One accepted command: its name and positional arguments.
///
/// Unknown fields are ignored on load and a missing `arguments` array reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: String,
    #[serde(default)]
    pub arguments: Vec<CommandArg>,
}

impl CommandRecord {
    pub fn new(command: impl Into<String>, arguments: Vec<CommandArg>) -> Self {
        Self {
            command: command.into(),
            arguments,
        }
    }

    pub fn bare(command: impl Into<String>) -> Self {
        Self::new(command, Vec::new())
    }
}

/// Canonical text form: the name, then the space separated arguments if there are any.
/// This is exactly what the drone receives on deploy.
impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for arg in &self.arguments {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl FlipDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlipDirection::Forward => "f",
            FlipDirection::Back => "b",
            FlipDirection::Left => "l",
            FlipDirection::Right => "r",
        }
    }
}

impl FromStr for FlipDirection {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(FlipDirection::Forward),
            "b" => Ok(FlipDirection::Back),
            "l" => Ok(FlipDirection::Left),
            "r" => Ok(FlipDirection::Right),
            other => Err(SimError::InvalidFlipDirection(other.to_string())),
        }
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
