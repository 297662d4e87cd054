use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;
use tracing::debug;

use super::chart::{render_altitude, render_path};
use crate::events::{FlightEvent, FlightObserver, StateSnapshot};
use crate::resources::PlotConfig;
use crate::utils::SimError;

/// Writes `path.png` and `altitude.png` into the configured directory whenever
/// the corresponding picture changes.
pub struct PlotSink {
    config: PlotConfig,
}

impl PlotSink {
    pub fn new(config: PlotConfig) -> Result<Self, SimError> {
        std::fs::create_dir_all(&config.output_dir)?;
        Ok(Self { config })
    }

    pub fn path_chart_file(&self) -> PathBuf {
        self.config.output_dir.join("path.png")
    }

    pub fn altitude_chart_file(&self) -> PathBuf {
        self.config.output_dir.join("altitude.png")
    }
}

impl FlightObserver for PlotSink {
    fn on_state_change(
        &mut self,
        event: FlightEvent,
        snapshot: &StateSnapshot,
    ) -> Result<(), SimError> {
        let (width, height) = (self.config.width, self.config.height);
        if event.affects_path() {
            let pixmap = render_path(snapshot, width, height)?;
            write_png(&pixmap, &self.path_chart_file())?;
        }
        if event.affects_altitude() {
            let pixmap = render_altitude(&snapshot.altitude_data, width, height)?;
            write_png(&pixmap, &self.altitude_chart_file())?;
        }
        Ok(())
    }
}

fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), SimError> {
    pixmap
        .save_png(path)
        .map_err(|e| SimError::Render(format!("failed to write {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "plot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FlightHistory, FlightState};
    use tempfile::tempdir;

    fn sink_in(dir: &Path) -> PlotSink {
        PlotSink::new(PlotConfig {
            enabled: true,
            output_dir: dir.join("plots"),
            width: 200,
            height: 150,
        })
        .unwrap()
    }

    #[test]
    fn test_landing_writes_both_charts() {
        let dir = tempdir().unwrap();
        let mut sink = sink_in(dir.path());
        let snapshot = StateSnapshot::capture(&FlightState::default(), &FlightHistory::default());

        sink.on_state_change(FlightEvent::Landed, &snapshot).unwrap();

        assert!(sink.path_chart_file().exists());
        assert!(sink.altitude_chart_file().exists());
    }

    #[test]
    fn test_climb_only_writes_altitude_chart() {
        let dir = tempdir().unwrap();
        let mut sink = sink_in(dir.path());
        let snapshot = StateSnapshot::capture(&FlightState::default(), &FlightHistory::default());

        sink.on_state_change(FlightEvent::AltitudeChanged, &snapshot)
            .unwrap();

        assert!(!sink.path_chart_file().exists());
        let png = Pixmap::load_png(sink.altitude_chart_file()).unwrap();
        assert_eq!((png.width(), png.height()), (200, 150));
    }
}
