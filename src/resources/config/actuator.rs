use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::{DRONE_ADDR, LOCAL_ADDR, RESPONSE_TIMEOUT_MS};

/// Where the real drone lives on the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuatorConfig {
    /// Command port of the drone
    pub drone_addr: String,
    /// Local address the command socket binds to; replies arrive here
    pub local_addr: String,
    /// How long to wait for the drone to answer a command, `None` waits forever
    pub response_timeout_ms: Option<u64>,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            drone_addr: DRONE_ADDR.to_string(),
            local_addr: LOCAL_ADDR.to_string(),
            response_timeout_ms: Some(RESPONSE_TIMEOUT_MS),
        }
    }
}

impl ActuatorConfig {
    pub fn response_timeout(&self) -> Option<Duration> {
        self.response_timeout_ms.map(Duration::from_millis)
    }
}
