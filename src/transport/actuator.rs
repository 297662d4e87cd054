use tracing::info;

use crate::utils::SimError;

/// A device that accepts canonical command strings one at a time.
pub trait Actuator {
    /// Sends one command and returns the device's reply.
    fn send(&mut self, command: &str) -> Result<String, SimError>;
}

/// Opens the connection to an [`Actuator`]. Opening may bind sockets, so it is
/// only ever called once per link.
pub trait ActuatorConnector {
    fn connect(&self) -> Result<Box<dyn Actuator>, SimError>;
}

/// Session-owned handle to the external actuator.
///
/// The connection is opened on first use and held until the link is dropped;
/// a link never opens a second connection.
pub struct ActuatorLink {
    connector: Box<dyn ActuatorConnector>,
    live: Option<Box<dyn Actuator>>,
}

impl ActuatorLink {
    pub fn new(connector: impl ActuatorConnector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            live: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.live.is_some()
    }

    pub fn actuator(&mut self) -> Result<&mut dyn Actuator, SimError> {
        if self.live.is_none() {
            info!("Opening actuator connection");
            self.live = Some(self.connector.connect()?);
        }
        match self.live.as_deref_mut() {
            Some(actuator) => Ok(actuator),
            None => Err(SimError::TransportFailure(
                "actuator connection unavailable".into(),
            )),
        }
    }
}

impl std::fmt::Debug for ActuatorLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActuatorLink")
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    struct Echo;

    impl Actuator for Echo {
        fn send(&mut self, command: &str) -> Result<String, SimError> {
            Ok(command.to_string())
        }
    }

    struct CountingConnector(Rc<Cell<usize>>);

    impl ActuatorConnector for CountingConnector {
        fn connect(&self) -> Result<Box<dyn Actuator>, SimError> {
            self.0.set(self.0.get() + 1);
            Ok(Box::new(Echo))
        }
    }

    struct Unreachable;

    impl ActuatorConnector for Unreachable {
        fn connect(&self) -> Result<Box<dyn Actuator>, SimError> {
            Err(SimError::TransportFailure("no route".into()))
        }
    }

    #[test]
    fn test_link_connects_once() {
        let opened = Rc::new(Cell::new(0));
        let mut link = ActuatorLink::new(CountingConnector(Rc::clone(&opened)));
        assert!(!link.is_connected());

        link.actuator().unwrap().send("command").unwrap();
        link.actuator().unwrap().send("takeoff").unwrap();

        assert!(link.is_connected());
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn test_failed_connect_leaves_link_closed() {
        let mut link = ActuatorLink::new(Unreachable);
        assert!(matches!(link.actuator(), Err(SimError::TransportFailure(_))));
        assert!(!link.is_connected());
    }
}
