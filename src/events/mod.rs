mod sink;
mod snapshot;

pub use sink::{ChannelSink, FlightObserver, StateUpdate};
pub use snapshot::{FlightEvent, StateSnapshot};
