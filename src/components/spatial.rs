use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::utils::{compute_offset, normalize_bearing};

/// Dead-reckoned state of the drone relative to its takeoff point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// True strictly between a successful takeoff and a successful land.
    pub airborne: bool,

    /// Height above the takeoff point [cm]
    pub altitude: i64,

    /// Lateral offset from the takeoff point [cm]
    pub position: DVec2,

    /// Heading relative to the takeoff orientation [deg], always in `[0, 360)`
    pub bearing: i64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            airborne: false,
            altitude: 0,
            position: DVec2::ZERO,
            bearing: 0,
        }
    }
}

impl FlightState {
    /// Position after travelling `distance` at `relative_bearing` from the current heading.
    pub fn offset_position(&self, relative_bearing: i64, distance: i64) -> DVec2 {
        compute_offset(self.position, self.bearing + relative_bearing, distance)
    }

    /// Rotate clockwise by `degrees`.
    ///
    /// The delta is wrapped before combining so the result stays in `[0, 360)`.
    pub fn rotate_cw(&mut self, degrees: i64) {
        self.bearing = normalize_bearing(self.bearing + normalize_bearing(degrees));
    }

    /// Rotate counter-clockwise by `degrees`.
    pub fn rotate_ccw(&mut self, degrees: i64) {
        self.bearing = normalize_bearing(self.bearing - normalize_bearing(degrees));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_landed_at_origin() {
        let state = FlightState::default();
        assert!(!state.airborne);
        assert_eq!(state.altitude, 0);
        assert_eq!(state.position, DVec2::ZERO);
        assert_eq!(state.bearing, 0);
    }

    #[test]
    fn test_rotate_wraps() {
        let mut state = FlightState::default();
        state.rotate_ccw(90);
        assert_eq!(state.bearing, 270);
        state.rotate_cw(1000);
        assert_eq!(state.bearing, (270 + 1000) % 360);
        state.rotate_ccw(i64::MIN);
        assert!((0..360).contains(&state.bearing));
        state.rotate_cw(i64::MAX);
        assert!((0..360).contains(&state.bearing));
    }
}
