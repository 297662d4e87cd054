use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::components::{FlightHistory, FlightState};

/// What kind of change produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightEvent {
    Reset,
    Takeoff,
    Landed,
    AltitudeChanged,
    Moved,
    Rotated,
    Flipped,
}

impl FlightEvent {
    /// Whether the lateral path picture changed, heading included.
    pub fn affects_path(&self) -> bool {
        matches!(
            self,
            FlightEvent::Moved
                | FlightEvent::Rotated
                | FlightEvent::Flipped
                | FlightEvent::Landed
                | FlightEvent::Reset
        )
    }

    /// Whether the altitude trace changed.
    pub fn affects_altitude(&self) -> bool {
        matches!(
            self,
            FlightEvent::AltitudeChanged
                | FlightEvent::Takeoff
                | FlightEvent::Landed
                | FlightEvent::Reset
        )
    }
}

/// Read-only copy of everything a display needs after a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub airborne: bool,
    pub altitude: i64,
    pub position: DVec2,
    pub bearing: i64,
    pub altitude_data: Vec<i64>,
    pub path_coors: Vec<DVec2>,
    pub flip_coors: Vec<DVec2>,
}

impl StateSnapshot {
    pub fn capture(state: &FlightState, history: &FlightHistory) -> Self {
        Self {
            airborne: state.airborne,
            altitude: state.altitude,
            position: state.position,
            bearing: state.bearing,
            altitude_data: history.altitude_data.clone(),
            path_coors: history.path_coors.clone(),
            flip_coors: history.flip_coors.clone(),
        }
    }
}
