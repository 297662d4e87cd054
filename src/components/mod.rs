pub mod command;
pub mod history;
pub mod spatial;

pub use command::{CommandArg, CommandRecord, FlipDirection};
pub use history::FlightHistory;
pub use spatial::FlightState;
