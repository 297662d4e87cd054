pub const TAKEOFF_ALTITUDE: i64 = 81; // cm above the takeoff point
pub const SMOOTHING_WINDOW: usize = 5; // samples in the altitude moving average
pub const COMMAND_DELAY_MS: u64 = 2000; // emulated transmission latency per command

// Tello SDK link
pub const DRONE_ADDR: &str = "192.168.10.1:8889";
pub const LOCAL_ADDR: &str = "0.0.0.0:8889";
pub const RESPONSE_TIMEOUT_MS: u64 = 15_000;

pub const FULL_TURN_DEG: i64 = 360;

// Path chart limits (cm)
pub const PLOT_MIN_EXTENT: f64 = 200.0;
pub const PLOT_MARGIN: f64 = 40.0;
pub const PLOT_GRID_STEP: f64 = 100.0;

pub const DEFAULT_LOG_FILE: &str = "commands.json";
