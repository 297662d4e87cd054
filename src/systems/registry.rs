use std::collections::HashMap;

use crate::components::{CommandArg, FlipDirection};
use crate::simulator::Simulator;
use crate::utils::SimError;

/// Runs one named command against a simulator with already-parsed arguments.
pub type CommandHandler = fn(&mut Simulator, &[CommandArg]) -> Result<(), SimError>;

/// Explicit name → handler table.
///
/// Replay and the console only ever reach the simulator through this table, so
/// a name from a file or a socket can never invoke anything that is not a
/// registered flight command.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<String, CommandHandler>,
}

const FLIGHT_COMMANDS: [(&str, CommandHandler); 12] = [
    ("command", command),
    ("takeoff", takeoff),
    ("land", land),
    ("up", up),
    ("down", down),
    ("left", left),
    ("right", right),
    ("forward", forward),
    ("back", back),
    ("cw", cw),
    ("ccw", ccw),
    ("flip", flip),
];

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Adds a command. Names must be a single lowercase word and unique.
    pub fn register(&mut self, name: &str, handler: CommandHandler) -> Result<(), SimError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            return Err(SimError::invalid_argument(
                "register",
                format!("'{}' is not a valid command name", name),
            ));
        }
        if self.handlers.contains_key(name) {
            return Err(SimError::DuplicateCommand(name.to_string()));
        }
        self.handlers.insert(name.to_string(), handler);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<CommandHandler, SimError> {
        self.handlers
            .get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownCommand(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    /// The Tello flight vocabulary.
    fn default() -> Self {
        Self {
            handlers: FLIGHT_COMMANDS
                .iter()
                .map(|(name, handler)| (name.to_string(), *handler))
                .collect(),
        }
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

fn expect_no_args(command: &str, args: &[CommandArg]) -> Result<(), SimError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(SimError::invalid_argument(
            command,
            format!("takes no arguments, got {}", args.len()),
        ))
    }
}

fn int_arg(command: &str, args: &[CommandArg]) -> Result<i64, SimError> {
    match args {
        [CommandArg::Int(value)] => Ok(*value),
        [other] => Err(SimError::invalid_argument(
            command,
            format!("only accepts whole numbers, got {} '{}'", other.kind(), other),
        )),
        _ => Err(SimError::invalid_argument(
            command,
            format!("takes exactly one argument, got {}", args.len()),
        )),
    }
}

fn flip_arg(args: &[CommandArg]) -> Result<FlipDirection, SimError> {
    match args {
        [CommandArg::Text(direction)] => direction.parse(),
        [other] => Err(SimError::InvalidFlipDirection(other.to_string())),
        _ => Err(SimError::invalid_argument(
            "flip",
            format!("takes exactly one argument, got {}", args.len()),
        )),
    }
}

fn command(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    expect_no_args("command", args)?;
    sim.command();
    Ok(())
}

fn takeoff(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    expect_no_args("takeoff", args)?;
    sim.takeoff();
    Ok(())
}

fn land(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("land")?;
    expect_no_args("land", args)?;
    sim.land()
}

fn up(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("up")?;
    sim.up(int_arg("up", args)?)
}

fn down(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("down")?;
    sim.down(int_arg("down", args)?)
}

fn left(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("left")?;
    sim.left(int_arg("left", args)?)
}

fn right(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("right")?;
    sim.right(int_arg("right", args)?)
}

fn forward(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("forward")?;
    sim.forward(int_arg("forward", args)?)
}

fn back(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("back")?;
    sim.back(int_arg("back", args)?)
}

fn cw(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("cw")?;
    sim.cw(int_arg("cw", args)?)
}

fn ccw(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("ccw")?;
    sim.ccw(int_arg("ccw", args)?)
}

fn flip(sim: &mut Simulator, args: &[CommandArg]) -> Result<(), SimError> {
    sim.check_airborne("flip")?;
    sim.flip(flip_arg(args)?)
}
