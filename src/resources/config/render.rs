use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static PNG plots of the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub enabled: bool,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_dir: PathBuf::from("plots"),
            width: 800,
            height: 600,
        }
    }
}
