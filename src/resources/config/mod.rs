pub mod actuator;
pub mod builder;
pub mod errors;
pub mod render;
pub mod simulation;

pub use actuator::ActuatorConfig;
pub use builder::SimulatorConfigBuilder;
pub use errors::ConfigError;
pub use render::PlotConfig;
pub use simulation::SimulatorConfig;
