use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Append-only telemetry recorded as a side effect of flight commands.
///
/// Only consumed by displays and smoothing; command validation never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightHistory {
    /// Altitude after every vertical change [cm], starting with the pre-climb 0 at takeoff
    pub altitude_data: Vec<i64>,

    /// Every lateral fix [cm], starting with the takeoff point
    pub path_coors: Vec<DVec2>,

    /// Positions at which a flip was performed
    pub flip_coors: Vec<DVec2>,
}

impl Default for FlightHistory {
    fn default() -> Self {
        Self {
            altitude_data: Vec::new(),
            path_coors: vec![DVec2::ZERO],
            flip_coors: Vec::new(),
        }
    }
}

impl FlightHistory {
    pub fn record_altitude(&mut self, altitude: i64) {
        self.altitude_data.push(altitude);
    }

    pub fn record_position(&mut self, position: DVec2) {
        self.path_coors.push(position);
    }

    pub fn record_flip(&mut self, position: DVec2) {
        self.flip_coors.push(position);
    }
}
