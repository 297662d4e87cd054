use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, time::Duration};

use super::{actuator::ActuatorConfig, errors::ConfigError, render::PlotConfig};
use crate::utils::{COMMAND_DELAY_MS, SMOOTHING_WINDOW, TAKEOFF_ALTITUDE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Altitude reached by `takeoff` [cm]
    pub takeoff_altitude: i64,
    /// Window of the centered altitude moving average
    pub smoothing_window: usize,
    /// Pause after each accepted command, emulating the link to real hardware
    pub command_delay_ms: u64,
    pub actuator: ActuatorConfig,
    pub plot: PlotConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            takeoff_altitude: TAKEOFF_ALTITUDE,
            smoothing_window: SMOOTHING_WINDOW,
            command_delay_ms: COMMAND_DELAY_MS,
            actuator: ActuatorConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: SimulatorConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/tello-sim/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tello-sim").join("config.yaml"))
    }

    pub fn command_delay(&self) -> Duration {
        Duration::from_millis(self.command_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.takeoff_altitude <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "takeoff_altitude must be positive, got {}",
                self.takeoff_altitude
            )));
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::ValidationError(
                "smoothing_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
