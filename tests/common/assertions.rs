use approx::assert_relative_eq;
use glam::DVec2;

/// Assert two positions agree to within `epsilon` centimeters
#[track_caller]
pub fn assert_position_eq(actual: DVec2, expected: DVec2, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
}

/// Assert a bearing is in its canonical range
#[track_caller]
pub fn assert_bearing_valid(bearing: i64) {
    assert!(
        (0..360).contains(&bearing),
        "Bearing {} outside [0, 360)",
        bearing
    );
}
