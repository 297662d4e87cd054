use glam::DVec2;
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::events::StateSnapshot;
use crate::utils::{compute_offset, SimError, PLOT_GRID_STEP, PLOT_MARGIN, PLOT_MIN_EXTENT};

const PADDING: f32 = 40.0; // px around the plotting area
const MAX_GRID_LINES: f64 = 20.0;
const MARKER_RADIUS: f32 = 6.0;
const BAND_WIDTH: f32 = 25.0; // px, translucent error band under each trace

const BLUE: (u8, u8, u8) = (31, 119, 180);
const RED: (u8, u8, u8) = (214, 39, 40);

/// Data-space rectangle shown by a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl ChartBounds {
    /// At least ±200 cm on both axes, widened by 40 cm past any point outside that.
    pub fn for_path(points: &[DVec2]) -> Self {
        let (lo, hi) = points.iter().fold((DVec2::ZERO, DVec2::ZERO), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        });
        let axis_lo = |v: f64| {
            if v > -PLOT_MIN_EXTENT {
                -PLOT_MIN_EXTENT
            } else {
                v - PLOT_MARGIN
            }
        };
        let axis_hi = |v: f64| {
            if v < PLOT_MIN_EXTENT {
                PLOT_MIN_EXTENT
            } else {
                v + PLOT_MARGIN
            }
        };
        Self {
            min: DVec2::new(axis_lo(lo.x), axis_lo(lo.y)),
            max: DVec2::new(axis_hi(hi.x), axis_hi(hi.y)),
        }
    }

    /// Steps along x, altitude along y with headroom above the highest sample.
    pub fn for_altitude(data: &[i64]) -> Self {
        let lowest = data.iter().copied().min().unwrap_or(0).min(0) as f64;
        let highest = data.iter().copied().max().unwrap_or(0) as f64;
        Self {
            min: DVec2::new(-0.5, lowest),
            max: DVec2::new((data.len() as f64 - 0.5).max(0.5), (highest * 1.1).max(100.0)),
        }
    }

    pub fn span(&self) -> DVec2 {
        (self.max - self.min).max(DVec2::splat(f64::EPSILON))
    }
}

/// Maps data coordinates onto a pixmap.
pub(crate) struct Chart {
    bounds: ChartBounds,
    width: f32,
    height: f32,
}

impl Chart {
    pub(crate) fn new(bounds: ChartBounds, width: u32, height: u32) -> Self {
        Self {
            bounds,
            width: width as f32,
            height: height as f32,
        }
    }

    pub(crate) fn to_screen(&self, p: DVec2) -> (f32, f32) {
        let t = (p - self.bounds.min) / self.bounds.span();
        let x = PADDING + t.x as f32 * (self.width - 2.0 * PADDING);
        let y = self.height - PADDING - t.y as f32 * (self.height - 2.0 * PADDING);
        (x, y)
    }

    fn canvas(&self) -> Result<Pixmap, SimError> {
        let mut pixmap = Pixmap::new(self.width as u32, self.height as u32).ok_or_else(|| {
            SimError::Render(format!("invalid canvas size {}x{}", self.width, self.height))
        })?;
        pixmap.fill(Color::WHITE);
        Ok(pixmap)
    }

    fn segment(&self, a: DVec2, b: DVec2) -> Option<Path> {
        let (ax, ay) = self.to_screen(a);
        let (bx, by) = self.to_screen(b);
        let mut pb = PathBuilder::new();
        pb.move_to(ax, ay);
        pb.line_to(bx, by);
        pb.finish()
    }

    fn polyline(&self, points: &[DVec2]) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        if rest.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        let (x, y) = self.to_screen(*first);
        pb.move_to(x, y);
        for p in rest {
            let (x, y) = self.to_screen(*p);
            pb.line_to(x, y);
        }
        pb.finish()
    }

    fn draw_grid(&self, pixmap: &mut Pixmap, base_step: DVec2) {
        let span = self.bounds.span();
        let step = DVec2::new(grid_step(span.x, base_step.x), grid_step(span.y, base_step.y));
        let grid = stroke(1.0, false);
        let axis = stroke(1.5, false);
        let grid_paint = paint((220, 220, 220), 255);
        let axis_paint = paint((120, 120, 120), 255);
        let (min, max) = (self.bounds.min, self.bounds.max);

        let mut x = (min.x / step.x).ceil() * step.x;
        while x <= max.x {
            if let Some(line) = self.segment(DVec2::new(x, min.y), DVec2::new(x, max.y)) {
                let (p, s) = if x == 0.0 { (&axis_paint, &axis) } else { (&grid_paint, &grid) };
                pixmap.stroke_path(&line, p, s, Transform::identity(), None);
            }
            x += step.x;
        }

        let mut y = (min.y / step.y).ceil() * step.y;
        while y <= max.y {
            if let Some(line) = self.segment(DVec2::new(min.x, y), DVec2::new(max.x, y)) {
                let (p, s) = if y == 0.0 { (&axis_paint, &axis) } else { (&grid_paint, &grid) };
                pixmap.stroke_path(&line, p, s, Transform::identity(), None);
            }
            y += step.y;
        }
    }

    /// Translucent band, dashed line, then a marker on every sample.
    fn draw_trace(&self, pixmap: &mut Pixmap, points: &[DVec2], color: (u8, u8, u8)) {
        if let Some(path) = self.polyline(points) {
            pixmap.stroke_path(
                &path,
                &paint(color, 38),
                &stroke(BAND_WIDTH, false),
                Transform::identity(),
                None,
            );
            pixmap.stroke_path(
                &path,
                &paint(color, 255),
                &stroke(2.0, true),
                Transform::identity(),
                None,
            );
        }
        self.draw_markers(pixmap, points, color);
    }

    fn draw_markers(&self, pixmap: &mut Pixmap, points: &[DVec2], color: (u8, u8, u8)) {
        let marker = paint(color, 255);
        for p in points {
            let (x, y) = self.to_screen(*p);
            if let Some(dot) = PathBuilder::from_circle(x, y, MARKER_RADIUS) {
                pixmap.fill_path(&dot, &marker, FillRule::Winding, Transform::identity(), None);
            }
        }
    }
}

/// Top-down view of the flown path with flip markers and the current heading.
pub fn render_path(snapshot: &StateSnapshot, width: u32, height: u32) -> Result<Pixmap, SimError> {
    let mut extent = snapshot.path_coors.clone();
    extent.extend_from_slice(&snapshot.flip_coors);
    let bounds = ChartBounds::for_path(&extent);
    let chart = Chart::new(bounds, width, height);
    let mut pixmap = chart.canvas()?;

    chart.draw_grid(&mut pixmap, DVec2::splat(PLOT_GRID_STEP));
    chart.draw_trace(&mut pixmap, &snapshot.path_coors, BLUE);
    chart.draw_markers(&mut pixmap, &snapshot.flip_coors, RED);

    // heading tick, a tenth of the shorter axis long
    let reach = (bounds.span().min_element() / 10.0) as i64;
    let tip = compute_offset(snapshot.position, snapshot.bearing, reach);
    if let Some(tick) = chart.segment(snapshot.position, tip) {
        pixmap.stroke_path(
            &tick,
            &paint((0, 0, 0), 255),
            &stroke(3.0, false),
            Transform::identity(),
            None,
        );
    }

    Ok(pixmap)
}

/// Altitude after every vertical step.
pub fn render_altitude(altitude_data: &[i64], width: u32, height: u32) -> Result<Pixmap, SimError> {
    let chart = Chart::new(ChartBounds::for_altitude(altitude_data), width, height);
    let mut pixmap = chart.canvas()?;

    let points: Vec<DVec2> = altitude_data
        .iter()
        .enumerate()
        .map(|(step, &alt)| DVec2::new(step as f64, alt as f64))
        .collect();

    chart.draw_grid(&mut pixmap, DVec2::new(1.0, PLOT_GRID_STEP / 2.0));
    chart.draw_trace(&mut pixmap, &points, RED);
    Ok(pixmap)
}

fn grid_step(span: f64, base: f64) -> f64 {
    let mut step = base;
    while span / step > MAX_GRID_LINES {
        step *= 10.0;
    }
    step
}

fn paint(color: (u8, u8, u8), alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, alpha);
    paint.anti_alias = true;
    paint
}

fn stroke(width: f32, dashed: bool) -> Stroke {
    Stroke {
        width,
        dash: if dashed {
            StrokeDash::new(vec![8.0, 6.0], 0.0)
        } else {
            None
        },
        ..Stroke::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FlightHistory, FlightState};

    #[test]
    fn test_path_bounds_minimum_extent() {
        let bounds = ChartBounds::for_path(&[DVec2::ZERO, DVec2::new(50.0, 100.0)]);
        assert_eq!(bounds.min, DVec2::splat(-200.0));
        assert_eq!(bounds.max, DVec2::splat(200.0));
    }

    #[test]
    fn test_path_bounds_grow_with_margin() {
        let bounds = ChartBounds::for_path(&[DVec2::ZERO, DVec2::new(-350.0, 500.0)]);
        assert_eq!(bounds.min, DVec2::new(-390.0, -200.0));
        assert_eq!(bounds.max, DVec2::new(200.0, 540.0));
    }

    #[test]
    fn test_altitude_bounds() {
        let bounds = ChartBounds::for_altitude(&[0, 81, 181]);
        assert_eq!(bounds.min, DVec2::new(-0.5, 0.0));
        assert_eq!(bounds.max.x, 2.5);
        assert!((bounds.max.y - 199.1).abs() < 1e-9);

        let empty = ChartBounds::for_altitude(&[]);
        assert_eq!(empty.max.y, 100.0);
    }

    #[test]
    fn test_to_screen_corners() {
        let chart = Chart::new(ChartBounds::for_path(&[]), 480, 480);
        assert_eq!(chart.to_screen(DVec2::splat(-200.0)), (40.0, 440.0));
        assert_eq!(chart.to_screen(DVec2::splat(200.0)), (440.0, 40.0));
    }

    #[test]
    fn test_render_path_marks_flips() {
        let mut history = FlightHistory::default();
        let flip_at = DVec2::new(100.0, 100.0);
        history.record_position(flip_at);
        history.record_flip(flip_at);
        let snapshot = StateSnapshot::capture(&FlightState::default(), &history);

        let pixmap = render_path(&snapshot, 480, 480).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (480, 480));

        let chart = Chart::new(ChartBounds::for_path(&snapshot.path_coors), 480, 480);
        let (x, y) = chart.to_screen(flip_at);
        let pixel = pixmap.pixel(x as u32, y as u32).unwrap();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), RED);
    }

    #[test]
    fn test_render_rejects_empty_canvas() {
        assert!(matches!(
            render_altitude(&[0, 81], 0, 0),
            Err(SimError::Render(_))
        ));
    }
}
