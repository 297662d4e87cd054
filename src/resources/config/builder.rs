use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{errors::ConfigError, simulation::SimulatorConfig};

#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct SimulatorConfigBuilder {
    pub takeoff_altitude: Option<i64>,
    pub smoothing_window: Option<usize>,
    pub command_delay_ms: Option<u64>,
    pub drone_addr: Option<String>,
    pub local_addr: Option<String>,
    pub response_timeout_ms: Option<Option<u64>>,
    pub plot_dir: Option<PathBuf>,
}

impl SimulatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn takeoff_altitude(mut self, altitude: i64) -> Self {
        self.takeoff_altitude = Some(altitude);
        self
    }

    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = Some(window);
        self
    }

    pub fn command_delay_ms(mut self, delay: u64) -> Self {
        self.command_delay_ms = Some(delay);
        self
    }

    pub fn drone_addr(mut self, addr: impl Into<String>) -> Self {
        self.drone_addr = Some(addr.into());
        self
    }

    pub fn local_addr(mut self, addr: impl Into<String>) -> Self {
        self.local_addr = Some(addr.into());
        self
    }

    pub fn response_timeout_ms(mut self, timeout: Option<u64>) -> Self {
        self.response_timeout_ms = Some(timeout);
        self
    }

    /// Enables the PNG plot sink, writing into `dir`.
    pub fn plot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plot_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<SimulatorConfig, ConfigError> {
        let mut config = SimulatorConfig::default();

        if let Some(takeoff_altitude) = self.takeoff_altitude {
            config.takeoff_altitude = takeoff_altitude;
        }
        if let Some(smoothing_window) = self.smoothing_window {
            config.smoothing_window = smoothing_window;
        }
        if let Some(command_delay_ms) = self.command_delay_ms {
            config.command_delay_ms = command_delay_ms;
        }
        if let Some(drone_addr) = self.drone_addr {
            config.actuator.drone_addr = drone_addr;
        }
        if let Some(local_addr) = self.local_addr {
            config.actuator.local_addr = local_addr;
        }
        if let Some(response_timeout_ms) = self.response_timeout_ms {
            config.actuator.response_timeout_ms = response_timeout_ms;
        }
        if let Some(plot_dir) = self.plot_dir {
            config.plot.enabled = true;
            config.plot.output_dir = plot_dir;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = SimulatorConfigBuilder::new()
            .takeoff_altitude(120)
            .command_delay_ms(0)
            .drone_addr("127.0.0.1:7000")
            .response_timeout_ms(None)
            .build()
            .unwrap();

        assert_eq!(config.takeoff_altitude, 120);
        assert_eq!(config.command_delay_ms, 0);
        assert_eq!(config.actuator.drone_addr, "127.0.0.1:7000");
        assert_eq!(config.actuator.response_timeout_ms, None);
        assert_eq!(config.smoothing_window, 5);
    }

    #[test]
    fn test_plot_dir_enables_plots() {
        let config = SimulatorConfigBuilder::new().plot_dir("out").build().unwrap();
        assert!(config.plot.enabled);
        assert_eq!(config.plot.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_builder_validates() {
        let result = SimulatorConfigBuilder::new().takeoff_altitude(-5).build();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
