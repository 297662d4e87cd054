mod chart;
mod plot;

pub use chart::{render_altitude, render_path, ChartBounds};
pub use plot::PlotSink;
