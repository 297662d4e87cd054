//! Free-text command surface used by the interactive loop.

use std::path::PathBuf;

use crate::components::CommandArg;
use crate::utils::{SimError, DEFAULT_LOG_FILE};

const SESSION_COMMANDS: &str =
    "Special commands: save [file], load <file>, status, smooth, reset, deploy, help, exit";

/// Usage text listing the registered flight commands and the session commands.
pub fn help_text(flight_commands: &[&str]) -> String {
    format!(
        "Available commands: {}\n{}",
        flight_commands.join(", "),
        SESSION_COMMANDS
    )
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Empty,
    Exit,
    Help,
    Status,
    Reset,
    Deploy,
    Smooth,
    Save(PathBuf),
    Load(PathBuf),
    Flight { name: String, args: Vec<CommandArg> },
}

/// Parses `<command> [argument]`.
///
/// Only the keyword is case-insensitive; file names are kept as typed.
/// Flight names are not checked here, the registry rejects unknown ones.
pub fn parse_line(line: &str) -> Result<ConsoleInput, SimError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(ConsoleInput::Empty);
    };
    let keyword = keyword.to_lowercase();
    let argument = tokens.next();
    if tokens.next().is_some() {
        return Err(SimError::invalid_argument(
            &keyword,
            "invalid command format, expected '<command> [argument]'",
        ));
    }

    let input = match (keyword.as_str(), argument) {
        ("exit" | "quit", None) => ConsoleInput::Exit,
        ("help", None) => ConsoleInput::Help,
        ("status", None) => ConsoleInput::Status,
        ("reset", None) => ConsoleInput::Reset,
        ("deploy", None) => ConsoleInput::Deploy,
        ("smooth", None) => ConsoleInput::Smooth,
        ("save", file) => ConsoleInput::Save(PathBuf::from(file.unwrap_or(DEFAULT_LOG_FILE))),
        ("load", Some(file)) => ConsoleInput::Load(PathBuf::from(file)),
        ("load", None) => {
            return Err(SimError::invalid_argument(
                "load",
                "please specify a file to load (e.g. 'load my_flight.json')",
            ))
        }
        ("flip", Some(direction)) => ConsoleInput::Flight {
            name: keyword,
            args: vec![CommandArg::Text(direction.to_lowercase())],
        },
        (_, Some(value)) => {
            let value = value.parse::<i64>().map_err(|_| {
                SimError::invalid_argument(
                    &keyword,
                    format!("'{}' is not a whole number", value),
                )
            })?;
            ConsoleInput::Flight {
                name: keyword,
                args: vec![CommandArg::Int(value)],
            }
        }
        (_, None) => ConsoleInput::Flight {
            name: keyword,
            args: Vec::new(),
        },
    };
    Ok(input)
}
