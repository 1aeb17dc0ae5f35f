//! Line chart rendering with plotters

use crate::{
    display::{ChartConfig, ChartData},
    error::PresentError,
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// A chart widget that draws one price series
pub trait ChartRenderer: Send {
    fn render(&mut self, data: &ChartData, config: &ChartConfig) -> Result<(), PresentError>;
}

/// Draws the chart as a PNG file
pub struct PngChartRenderer {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PngChartRenderer {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Y range for the chart
///
/// Starts at zero when `begin_at_zero` is set, otherwise pads the observed
/// range by 10% on each side.
pub(crate) fn y_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let padding = (max - min).max(1e-8) * 0.1;
    let lower = if begin_at_zero { min.min(0.0) } else { min - padding };
    let upper = if begin_at_zero { max.max(0.0) + padding } else { max + padding };
    (lower, upper)
}

impl ChartRenderer for PngChartRenderer {
    fn render(&mut self, data: &ChartData, config: &ChartConfig) -> Result<(), PresentError> {
        if data.is_empty() {
            return Err(PresentError::chart("No points to draw"));
        }

        let (y_min, y_max) = y_range(&data.values, config.begin_at_zero);
        let x_max = data.len().max(2) - 1;
        let (r, g, b) = config.line_rgb;
        let color = RGBColor(r, g, b);

        {
            let root = BitMapBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| PresentError::chart(format!("Failed to fill canvas: {}", e)))?;

            let mut chart = ChartBuilder::on(&root)
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(80)
                .build_cartesian_2d(0..x_max, y_min..y_max)
                .map_err(|e| PresentError::chart(format!("Failed to build chart: {}", e)))?;

            let label_for = |i: &usize| data.labels.get(*i).cloned().unwrap_or_default();
            chart
                .configure_mesh()
                .x_labels(data.len().min(8))
                .x_label_formatter(&label_for)
                .x_desc("Time")
                .y_desc(config.series_label.as_str())
                .draw()
                .map_err(|e| PresentError::chart(format!("Failed to draw mesh: {}", e)))?;

            chart
                .draw_series(LineSeries::new(
                    data.values.iter().copied().enumerate(),
                    color.stroke_width(config.line_width),
                ))
                .map_err(|e| PresentError::chart(format!("Failed to draw line: {}", e)))?
                .label(config.series_label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

            chart
                .draw_series(
                    data.values
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|point| Circle::new(point, 3, color.filled())),
                )
                .map_err(|e| PresentError::chart(format!("Failed to draw points: {}", e)))?;

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| PresentError::chart(format!("Failed to draw legend: {}", e)))?;

            root.present()
                .map_err(|e| PresentError::chart(format!("Failed to render chart: {}", e)))?;
        }

        tracing::info!(
            path = %self.path.display(),
            points = data.len(),
            "Rendered price chart"
        );

        Ok(())
    }
}
