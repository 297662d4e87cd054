use std::{
    io::ErrorKind,
    net::{SocketAddr, ToSocketAddrs, UdpSocket},
};
use tracing::{debug, info};

use super::actuator::{Actuator, ActuatorConnector};
use crate::resources::ActuatorConfig;
use crate::utils::SimError;

const MAX_REPLY_SIZE: usize = 1024;

/// Text-command link to a Tello over UDP.
///
/// Every command is one datagram; the drone answers each with one datagram
/// (`ok`, `error ...` or a queried value).
pub struct UdpActuator {
    socket: UdpSocket,
    drone: SocketAddr,
}

impl UdpActuator {
    pub fn connect(config: &ActuatorConfig) -> Result<Self, SimError> {
        let drone = resolve(&config.drone_addr)?;
        let socket = UdpSocket::bind(&config.local_addr).map_err(|e| {
            SimError::TransportFailure(format!("failed to bind {}: {}", config.local_addr, e))
        })?;
        socket
            .set_read_timeout(config.response_timeout())
            .map_err(|e| SimError::TransportFailure(format!("invalid response timeout: {}", e)))?;
        socket
            .connect(drone)
            .map_err(|e| SimError::TransportFailure(format!("failed to reach {}: {}", drone, e)))?;

        info!(%drone, local = ?socket.local_addr().ok(), "UDP actuator ready");
        Ok(Self { socket, drone })
    }
}

impl Actuator for UdpActuator {
    fn send(&mut self, command: &str) -> Result<String, SimError> {
        debug!(command, drone = %self.drone, "sending");
        self.socket
            .send(command.as_bytes())
            .map_err(|e| SimError::TransportFailure(format!("send '{}' failed: {}", command, e)))?;

        let mut buf = [0u8; MAX_REPLY_SIZE];
        let n = self.socket.recv(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => {
                SimError::TransportFailure(format!("no reply to '{}' from {}", command, self.drone))
            }
            _ => SimError::TransportFailure(format!("receive failed: {}", e)),
        })?;

        let reply = String::from_utf8_lossy(&buf[..n]).trim().to_string();
        debug!(command, %reply, "drone replied");
        if reply.starts_with("error") {
            return Err(SimError::TransportFailure(format!(
                "drone rejected '{}': {}",
                command, reply
            )));
        }
        Ok(reply)
    }
}

/// Opens a [`UdpActuator`] from configuration.
#[derive(Debug, Clone)]
pub struct UdpConnector {
    config: ActuatorConfig,
}

impl UdpConnector {
    pub fn new(config: ActuatorConfig) -> Self {
        Self { config }
    }
}

impl ActuatorConnector for UdpConnector {
    fn connect(&self) -> Result<Box<dyn Actuator>, SimError> {
        Ok(Box::new(UdpActuator::connect(&self.config)?))
    }
}

fn resolve(addr: &str) -> Result<SocketAddr, SimError> {
    addr.to_socket_addrs()
        .map_err(|e| SimError::TransportFailure(format!("bad drone address {}: {}", addr, e)))?
        .next()
        .ok_or_else(|| SimError::TransportFailure(format!("drone address {} did not resolve", addr)))
}
