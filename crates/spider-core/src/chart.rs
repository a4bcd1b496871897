// File: crates/spider-core/src/chart.rs
// Summary: Chart definition, building API and the validate -> layout -> draw pipeline.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{compute_axes, Axis, AxisGeometry};
use crate::draw::{CommandList, DrawCommand, DrawSurface};
use crate::error::{SpiderResult, ValidationError};
use crate::legend::{self, LegendRow};
use crate::options::ChartOptions;
use crate::region::{allocate, Regions};
use crate::render::draw_layout;
use crate::series::{compute_series, Series, SeriesGeometry};
use crate::text::{FontOracle, FontSet};
use crate::types::{MAX_AXES, MAX_SERIES};
use crate::validate::validate;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub axes: Vec<Axis>,
    #[serde(default)]
    pub series: Vec<Series>,
}

/// A complete chart definition. Rendering borrows it read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub data: ChartData,
}

/// Everything computed for one render. Built once, then only read.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    pub canvas: Size,
    pub regions: Regions,
    pub center: Point,
    pub radius: f64,
    pub axes: Vec<AxisGeometry>,
    pub series: Vec<SeriesGeometry>,
    pub legend_rows: Vec<LegendRow>,
    pub fonts: FontSet,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: ChartData) -> Self {
        Self {
            options: ChartOptions::default(),
            data,
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.options.width, self.options.height)
    }

    /// Plot radius in millimeters, shared by axes, series and the plot outline.
    pub fn radius(&self) -> f64 {
        let plot = &self.options.plot_options;
        plot.scale * self.options.width.min(self.options.height) / 2.0 - plot.padding
    }

    pub fn add_axis(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.push_axis(Axis::new(name))
    }

    pub fn add_axis_with_max(
        &mut self,
        name: impl Into<String>,
        max: f64,
    ) -> Result<(), ValidationError> {
        self.push_axis(Axis::with_max(name, max))
    }

    fn push_axis(&mut self, axis: Axis) -> Result<(), ValidationError> {
        if self.data.axes.iter().any(|a| a.name == axis.name) {
            let msg = format!("axis {} already exists", axis.name);
            return Err(ValidationError::new("axes", msg));
        }
        if self.data.axes.len() >= MAX_AXES {
            return Err(ValidationError::new(
                "axes",
                format!("maximum {MAX_AXES} axes allowed, got {}", self.data.axes.len()),
            ));
        }
        self.data.axes.push(axis);
        Ok(())
    }

    pub fn add_series<K, I>(
        &mut self,
        name: impl Into<String>,
        data: I,
    ) -> Result<(), ValidationError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        self.push_series(Series::with_data(name, data))
    }

    /// Add a fully built series (with its own options).
    pub fn push_series(&mut self, series: Series) -> Result<(), ValidationError> {
        if self.data.series.iter().any(|s| s.name == series.name) {
            let msg = format!("series {} already exists", series.name);
            return Err(ValidationError::new("series", msg));
        }
        if self.data.series.len() >= MAX_SERIES {
            return Err(ValidationError::new(
                "series",
                format!("maximum {MAX_SERIES} series allowed, got {}", self.data.series.len()),
            ));
        }
        self.data.series.push(series);
        Ok(())
    }

    /// Validate and compute every region, axis, series polygon and legend row.
    pub fn layout(&self, oracle: &mut dyn FontOracle) -> SpiderResult<LayoutResult> {
        let fonts = validate(self, oracle)?;
        let canvas = self.canvas_size();
        let regions = allocate(canvas, &self.options, &fonts, oracle);
        let center = regions.plot_center();
        let radius = self.radius();

        let opts = &self.options;
        let axes = compute_axes(&self.data.axes, &self.data.series, radius, &opts.axis_options);
        let series = compute_series(&self.data.series, &axes, center, radius, opts);
        let legend_rows = match regions.legend {
            Some(rect) => {
                let labels: Vec<&str> = self.data.series.iter().map(|s| s.name.as_str()).collect();
                legend::layout(&labels, rect, fonts.legend_label, oracle, &opts.legend_options)
            }
            None => Vec::new(),
        };
        debug!(
            axes = axes.len(),
            series = series.len(),
            legend_rows = legend_rows.len(),
            radius,
            "chart layout computed"
        );
        Ok(LayoutResult {
            canvas,
            regions,
            center,
            radius,
            axes,
            series,
            legend_rows,
            fonts,
        })
    }

    /// Validate, lay out and draw onto `surface`. Nothing is drawn when validation fails.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        oracle: &mut dyn FontOracle,
    ) -> SpiderResult<LayoutResult> {
        let layout = self.layout(oracle)?;
        draw_layout(&layout, &self.options, surface);
        Ok(layout)
    }

    /// Render into a recorded command list.
    pub fn render_commands(&self, oracle: &mut dyn FontOracle) -> SpiderResult<Vec<DrawCommand>> {
        let mut list = CommandList::new();
        self.render(&mut list, oracle)?;
        Ok(list.into_commands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builder_rejects_duplicates_and_overflow() {
        let mut c = Chart::new();
        c.add_axis("a").unwrap();
        assert_eq!(c.add_axis("a").unwrap_err().field, "axes");
        for i in 1..MAX_AXES {
            c.add_axis(format!("a{i}")).unwrap();
        }
        assert!(c.add_axis("one too many").is_err());
        assert_eq!(c.data.axes.len(), MAX_AXES);

        for i in 0..MAX_SERIES {
            c.add_series(format!("s{i}"), Vec::<(String, f64)>::new()).unwrap();
        }
        let err = c.add_series("extra", Vec::<(String, f64)>::new()).unwrap_err();
        assert_eq!(err.field, "series");
        assert!(c.add_series("s0", Vec::<(String, f64)>::new()).is_err());
    }

    #[test]
    fn default_radius() {
        assert_relative_eq!(Chart::new().radius(), 0.6 * 100.0 - 5.0);
    }
}
