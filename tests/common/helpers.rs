use tello_sim::{Simulator, SimulatorConfig, SimulatorConfigBuilder};

use super::fixtures::{DroneLog, OfflineConnector, RecordingConnector};

/// Default configuration without the per-command delay
pub fn create_test_config() -> SimulatorConfig {
    SimulatorConfigBuilder::new()
        .command_delay_ms(0)
        .build()
        .expect("test config is valid")
}

/// Session that can never reach a drone
pub fn create_test_simulator() -> Simulator {
    Simulator::with_connector(create_test_config(), OfflineConnector)
}

/// Session deploying into a recording fake drone
pub fn create_recording_simulator() -> (Simulator, DroneLog) {
    let drone = DroneLog::default();
    let sim = Simulator::with_connector(create_test_config(), RecordingConnector::new(&drone));
    (sim, drone)
}

/// Airborne session at the default takeoff altitude
pub fn create_airborne_simulator() -> Simulator {
    let mut sim = create_test_simulator();
    assert!(sim.takeoff());
    sim
}
