use std::{cell::RefCell, rc::Rc};
use tello_sim::{FlightEvent, FlightObserver, SimError, StateSnapshot};

/// Remembers every event it is handed.
#[derive(Clone, Default)]
pub struct EventRecorder {
    pub events: Rc<RefCell<Vec<(FlightEvent, StateSnapshot)>>>,
}

impl EventRecorder {
    pub fn kinds(&self) -> Vec<FlightEvent> {
        self.events.borrow().iter().map(|(event, _)| *event).collect()
    }
}

impl FlightObserver for EventRecorder {
    fn on_state_change(
        &mut self,
        event: FlightEvent,
        snapshot: &StateSnapshot,
    ) -> Result<(), SimError> {
        self.events.borrow_mut().push((event, snapshot.clone()));
        Ok(())
    }
}

/// Observer that always fails, as a broken display would.
pub struct FailingObserver;

impl FlightObserver for FailingObserver {
    fn on_state_change(&mut self, _: FlightEvent, _: &StateSnapshot) -> Result<(), SimError> {
        Err(SimError::Render("display unavailable".into()))
    }
}
