use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tello_sim::{
    transport::{Actuator, ActuatorConnector},
    SimError,
};

/// What a fake drone saw: connection count and every command received.
#[derive(Clone, Default)]
pub struct DroneLog {
    pub connections: Rc<Cell<usize>>,
    pub received: Rc<RefCell<Vec<String>>>,
    /// Reply "error" to the command at this index
    pub fail_at: Rc<Cell<Option<usize>>>,
}

impl DroneLog {
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

pub struct RecordingActuator {
    drone: DroneLog,
}

impl Actuator for RecordingActuator {
    fn send(&mut self, command: &str) -> Result<String, SimError> {
        let index = self.drone.received.borrow().len();
        self.drone.received.borrow_mut().push(command.to_string());
        if self.drone.fail_at.get() == Some(index) {
            return Err(SimError::TransportFailure(format!(
                "drone rejected '{}'",
                command
            )));
        }
        Ok("ok".to_string())
    }
}

pub struct RecordingConnector {
    drone: DroneLog,
}

impl RecordingConnector {
    pub fn new(drone: &DroneLog) -> Self {
        Self {
            drone: drone.clone(),
        }
    }
}

impl ActuatorConnector for RecordingConnector {
    fn connect(&self) -> Result<Box<dyn Actuator>, SimError> {
        self.drone.connections.set(self.drone.connections.get() + 1);
        Ok(Box::new(RecordingActuator {
            drone: self.drone.clone(),
        }))
    }
}

/// Connector for sessions that must never deploy
pub struct OfflineConnector;

impl ActuatorConnector for OfflineConnector {
    fn connect(&self) -> Result<Box<dyn Actuator>, SimError> {
        Err(SimError::TransportFailure("offline".into()))
    }
}
