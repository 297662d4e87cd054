pub mod command_log;
pub mod config;

pub use command_log::CommandLog;
pub use config::{
    ActuatorConfig, ConfigError, PlotConfig, SimulatorConfig, SimulatorConfigBuilder,
};
