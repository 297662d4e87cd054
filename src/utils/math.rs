use glam::DVec2;
use std::f64::consts::PI;

use super::constants::FULL_TURN_DEG;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Wrap an angle in whole degrees into `[0, 360)`.
#[inline]
pub fn normalize_bearing(deg: i64) -> i64 {
    deg.rem_euclid(FULL_TURN_DEG)
}

/// Dead-reckon a new position from `origin`, travelling `distance` along `bearing`.
///
/// Bearing 0 points along +y and increases clockwise, so bearing 90 is +x.
/// The bearing is not required to be normalized.
pub fn compute_offset(origin: DVec2, bearing_deg: i64, distance: i64) -> DVec2 {
    let rads = deg_to_rad(bearing_deg as f64);
    let dist = distance as f64;
    origin + DVec2::new(rads.sin() * dist, rads.cos() * dist)
}
