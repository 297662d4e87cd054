mod actuator;
mod udp;

pub use actuator::{Actuator, ActuatorConnector, ActuatorLink};
pub use udp::{UdpActuator, UdpConnector};
