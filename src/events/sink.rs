use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use super::snapshot::{FlightEvent, StateSnapshot};
use crate::utils::SimError;

/// Something that reacts to flight state changes, e.g. a plot.
///
/// Errors are reported back to the simulator, which logs them and carries on.
pub trait FlightObserver {
    fn on_state_change(&mut self, event: FlightEvent, snapshot: &StateSnapshot)
        -> Result<(), SimError>;
}

pub type StateUpdate = (FlightEvent, StateSnapshot);

/// Forwards every change to another thread, typically a live display.
pub struct ChannelSink {
    sender: Sender<StateUpdate>,
}

impl ChannelSink {
    pub fn new(sender: Sender<StateUpdate>) -> Self {
        Self { sender }
    }

    /// Sink plus the receiving end of an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<StateUpdate>) {
        let (s, r) = crossbeam_channel::unbounded();
        (Self::new(s), r)
    }
}

impl FlightObserver for ChannelSink {
    fn on_state_change(
        &mut self,
        event: FlightEvent,
        snapshot: &StateSnapshot,
    ) -> Result<(), SimError> {
        // A display that went away is not the simulator's problem.
        if self.sender.send((event, snapshot.clone())).is_err() {
            debug!(?event, "display receiver disconnected, dropping update");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FlightHistory, FlightState};

    #[test]
    fn test_channel_sink_forwards_updates() {
        let (mut sink, rx) = ChannelSink::unbounded();
        let snapshot = StateSnapshot::capture(&FlightState::default(), &FlightHistory::default());

        sink.on_state_change(FlightEvent::Reset, &snapshot).unwrap();

        let (event, received) = rx.try_recv().unwrap();
        assert_eq!(event, FlightEvent::Reset);
        assert_eq!(received, snapshot);
    }

    #[test]
    fn test_channel_sink_tolerates_dropped_receiver() {
        let (mut sink, rx) = ChannelSink::unbounded();
        drop(rx);
        let snapshot = StateSnapshot::capture(&FlightState::default(), &FlightHistory::default());
        assert!(sink.on_state_change(FlightEvent::Moved, &snapshot).is_ok());
    }
}
