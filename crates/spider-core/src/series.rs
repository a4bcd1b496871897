// File: crates/spider-core/src/series.rs
// Summary: Series model, style resolution and polar projection of series values.
// Notes:
// - Data is an insertion-ordered map so validation reports offending keys deterministically.
// - Style resolution never fails: series options, then chart-wide series options,
//   then palette and defaults.

use indexmap::IndexMap;
use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::axis::AxisGeometry;
use crate::geometry::polar;
use crate::options::{ChartOptions, PointShape, SeriesOptions};
use crate::theme::{palette_color, palette_marker, SeriesStyle};
use crate::types::{
    DEFAULT_FILL_OPACITY, DEFAULT_POINT_FILL_OPACITY, DEFAULT_POINT_SIZE,
    DEFAULT_SERIES_LINE_THICKNESS, MARKER_CENTER_EPSILON,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// Axis name to value. Keys must match the chart's axis names exactly.
    pub data: IndexMap<String, f64>,
    #[serde(default)]
    pub options: SeriesOptions,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: IndexMap::new(),
            options: SeriesOptions::default(),
        }
    }

    pub fn with_data<K, I>(name: impl Into<String>, data: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            name: name.into(),
            data: data.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            options: SeriesOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SeriesOptions) -> Self {
        self.options = options;
        self
    }

    /// Value on `axis`, or 0 when absent.
    pub fn value(&self, axis: &str) -> f64 {
        self.data.get(axis).copied().unwrap_or(0.0)
    }
}

/// Resolve the drawing style of the series at position `index`.
pub fn resolve_style(series: &Series, index: usize, chart: &ChartOptions) -> SeriesStyle {
    let own = &series.options;
    let shared = &chart.series_options;
    // series value first, then the chart-wide one
    macro_rules! pick {
        ($field:ident) => {
            own.$field.or(shared.$field)
        };
    }

    let line_color = pick!(line_color).unwrap_or_else(|| palette_color(&chart.colors, index));
    let line_thickness = pick!(line_thickness).unwrap_or(DEFAULT_SERIES_LINE_THICKNESS);

    let fill_opacity = pick!(fill_opacity).unwrap_or(DEFAULT_FILL_OPACITY);
    let fill_color = pick!(fill_color).unwrap_or(line_color).with_opacity(fill_opacity);

    let point_shape =
        pick!(point_shape).unwrap_or_else(|| palette_marker(&chart.point_markers, index));
    let point_size = pick!(point_size).unwrap_or(DEFAULT_POINT_SIZE);
    let point_line_thickness = pick!(point_line_thickness).unwrap_or(line_thickness);
    let point_stroke_color = pick!(point_stroke_color).unwrap_or(line_color);
    let point_fill_opacity = pick!(point_fill_opacity).unwrap_or(DEFAULT_POINT_FILL_OPACITY);
    let point_fill_color =
        pick!(point_fill_color).unwrap_or(point_stroke_color).with_opacity(point_fill_opacity);

    SeriesStyle {
        line_color,
        line_thickness,
        fill_color,
        point_shape,
        point_size,
        point_line_thickness,
        point_stroke_color,
        point_fill_color,
    }
}

/// Polygon vertices of `series`, one per axis in axis order.
///
/// Vertex `i` lies at `radius * scale.fraction(value, max)` along axis `i`.
/// Linear values above the axis maximum land outside the plot.
pub fn project(series: &Series, axes: &[AxisGeometry], center: Point, radius: f64) -> Vec<Point> {
    axes.iter()
        .map(|axis| {
            let r = radius * axis.scale.fraction(series.value(&axis.name), axis.max);
            polar(center, r, axis.angle_deg)
        })
        .collect()
}

/// A projected series ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub name: String,
    pub points: Vec<Point>,
    /// Vertices that get a marker; empty when markers are off for this series.
    pub markers: Vec<Point>,
    pub style: SeriesStyle,
}

pub fn compute_series(
    series: &[Series],
    axes: &[AxisGeometry],
    center: Point,
    radius: f64,
    chart: &ChartOptions,
) -> Vec<SeriesGeometry> {
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let style = resolve_style(s, i, chart);
            let points = project(s, axes, center, radius);
            let markers = if chart.show_point_markers && style.point_shape != PointShape::None {
                points
                    .iter()
                    .copied()
                    .filter(|p| p.distance(center) >= MARKER_CENTER_EPSILON)
                    .collect()
            } else {
                Vec::new()
            };
            SeriesGeometry {
                name: s.name.clone(),
                points,
                markers,
                style,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::theme::DEFAULT_PALETTE;

    #[test]
    fn style_falls_through_three_levels() {
        let mut chart = ChartOptions::default();
        chart.series_options.line_thickness = Some(1.5);
        let mut s = Series::new("a");
        s.options.fill_opacity = Some(0.0);
        let st = resolve_style(&s, 1, &chart);
        assert_eq!(st.line_color, DEFAULT_PALETTE[1]);
        assert_eq!(st.line_thickness, 1.5);
        assert!(!st.has_fill());
        assert_eq!(st.point_shape, PointShape::Square);
        assert_eq!(st.point_fill_color, DEFAULT_PALETTE[1]);
    }

    #[test]
    fn default_fill_uses_line_color_at_quarter_opacity() {
        let st = resolve_style(&Series::new("a"), 0, &ChartOptions::default());
        assert_eq!(st.fill_color, DEFAULT_PALETTE[0].with_opacity(0.25));
        assert_eq!(st.fill_color.a, 63);
    }

    #[test]
    fn series_override_beats_chart_override() {
        let mut chart = ChartOptions::default();
        chart.series_options.line_color = Some(Rgba::WHITE);
        let mut s = Series::new("a");
        s.options.line_color = Some(Rgba::BLACK);
        assert_eq!(resolve_style(&s, 0, &chart).line_color, Rgba::BLACK);
        assert_eq!(resolve_style(&Series::new("b"), 0, &chart).line_color, Rgba::WHITE);
    }
}
