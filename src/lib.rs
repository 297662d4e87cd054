pub mod components;
pub mod console;
pub mod events;
pub mod rendering;
pub mod resources;
pub mod simulator;
pub mod systems;
pub mod transport;
pub mod utils;

pub use components::{CommandArg, CommandRecord, FlightHistory, FlightState, FlipDirection};
pub use events::{ChannelSink, FlightEvent, FlightObserver, StateSnapshot};
pub use resources::{CommandLog, SimulatorConfig, SimulatorConfigBuilder};
pub use simulator::Simulator;
pub use utils::{compute_offset, SimError};
