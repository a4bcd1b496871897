// File: crates/spider-core/src/options.rs
// Summary: Chart option model (page, plot, axes, series, legend, fonts) with serde defaults.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::text::{FaceRequest, FontRole};
use crate::types::*;

/// Shape drawn through the axis tips as the plot outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectType {
    #[default]
    Circle,
    Polygon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointShape {
    Circle,
    Square,
    Triangle,
    Diamond,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPlacement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// A text style: optional face (by family name or file path), size in points and color.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
}

impl FontSpec {
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn color(&self) -> Rgba {
        self.color.unwrap_or(Rgba::BLACK)
    }

    pub fn size_or(&self, fallback: f64) -> f64 {
        self.size.unwrap_or(fallback)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Fraction of the canvas the plot square occupies, in (0, 1].
    pub scale: f64,
    pub outline_thickness: f64,
    pub outline_color: Rgba,
    pub connect_type: ConnectType,
    pub margin: f64,
    pub padding: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_PLOT_SCALE,
            outline_thickness: DEFAULT_PLOT_OUTLINE_THICKNESS,
            outline_color: Rgba::BLACK,
            connect_type: ConnectType::Circle,
            margin: DEFAULT_PLOT_MARGIN,
            padding: DEFAULT_PLOT_PADDING,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub line_thickness: f64,
    pub line_color: Rgba,
    pub label_offset: f64,
    pub label_style: FontSpec,
    pub tick_label_style: FontSpec,
    pub major_ticks: usize,
    pub minor_ticks: usize,
    pub major_tick_length: f64,
    pub minor_tick_length: f64,
    pub major_tick_line_thickness: f64,
    pub minor_tick_line_thickness: f64,
    pub show_axis: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_AXIS_LINE_THICKNESS,
            line_color: Rgba::BLACK,
            label_offset: DEFAULT_LABEL_OFFSET,
            label_style: FontSpec::sized(DEFAULT_AXIS_LABEL_FONT_SIZE),
            tick_label_style: FontSpec::sized(DEFAULT_TICK_LABEL_FONT_SIZE),
            major_ticks: DEFAULT_MAJOR_TICK_COUNT,
            minor_ticks: DEFAULT_MINOR_TICK_COUNT,
            major_tick_length: DEFAULT_MAJOR_TICK_LENGTH,
            minor_tick_length: DEFAULT_MINOR_TICK_LENGTH,
            major_tick_line_thickness: DEFAULT_MAJOR_TICK_LINE_THICKNESS,
            minor_tick_line_thickness: DEFAULT_MINOR_TICK_LINE_THICKNESS,
            show_axis: true,
        }
    }
}

/// Per-series style overrides. Every field is optional; zero is a legitimate value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_line_thickness: Option<f64>,
    #[serde(rename = "point_color", skip_serializing_if = "Option::is_none")]
    pub point_stroke_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_fill_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_shape: Option<PointShape>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub placement: LegendPlacement,
    pub min_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    pub min_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    pub line_length: f64,
    pub line_thickness: f64,
    pub outline_thickness: f64,
    pub outline_color: Rgba,
    pub style: FontSpec,
    pub padding: f64,
    pub show_outline: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            placement: LegendPlacement::Bottom,
            min_width: 0.0,
            max_width: None,
            min_height: 0.0,
            max_height: None,
            line_length: DEFAULT_LEGEND_LINE_LENGTH,
            line_thickness: DEFAULT_LEGEND_LINE_THICKNESS,
            outline_thickness: DEFAULT_LEGEND_OUTLINE_THICKNESS,
            outline_color: Rgba::BLACK,
            style: FontSpec::sized(DEFAULT_LEGEND_FONT_SIZE),
            padding: DEFAULT_LEGEND_PADDING,
            show_outline: false,
        }
    }
}

/// Everything about a chart except its data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Canvas width in millimeters.
    pub width: f64,
    /// Canvas height in millimeters.
    pub height: f64,
    pub background: Rgba,
    pub title: String,
    pub title_style: FontSpec,
    pub title_margin: f64,
    pub subtitle: String,
    pub subtitle_style: FontSpec,
    pub subtitle_margin: f64,
    pub plot_options: PlotOptions,
    pub axis_options: AxisOptions,
    pub series_options: SeriesOptions,
    pub legend_options: LegendOptions,
    /// Series palette, indexed by series position modulo its length.
    pub colors: Vec<Rgba>,
    pub point_markers: Vec<PointShape>,
    pub page_margin: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font_path: Option<String>,
    pub show_title: bool,
    pub show_subtitle: bool,
    pub show_legend: bool,
    #[serde(alias = "show_axis_labels")]
    pub show_axis_names: bool,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
    pub show_point_markers: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            background: Rgba::WHITE,
            title: String::new(),
            title_style: FontSpec::sized(DEFAULT_TITLE_FONT_SIZE),
            title_margin: DEFAULT_TITLE_MARGIN,
            subtitle: String::new(),
            subtitle_style: FontSpec::sized(DEFAULT_SUBTITLE_FONT_SIZE),
            subtitle_margin: DEFAULT_SUBTITLE_MARGIN,
            plot_options: PlotOptions::default(),
            axis_options: AxisOptions::default(),
            series_options: SeriesOptions::default(),
            legend_options: LegendOptions::default(),
            colors: crate::theme::default_palette(),
            point_markers: crate::theme::DEFAULT_POINT_MARKERS.to_vec(),
            page_margin: DEFAULT_PAGE_MARGIN,
            default_font_name: None,
            default_font_path: None,
            show_title: true,
            show_subtitle: true,
            show_legend: true,
            show_axis_names: true,
            show_ticks: true,
            show_tick_labels: true,
            show_point_markers: true,
        }
    }
}

impl ChartOptions {
    pub fn font_spec(&self, role: FontRole) -> &FontSpec {
        match role {
            FontRole::Title => &self.title_style,
            FontRole::Subtitle => &self.subtitle_style,
            FontRole::AxisLabel => &self.axis_options.label_style,
            FontRole::TickLabel => &self.axis_options.tick_label_style,
            FontRole::LegendLabel => &self.legend_options.style,
        }
    }

    /// Face request for `role`. A style naming neither a face nor a path inherits the
    /// chart default.
    pub fn face_request(&self, role: FontRole) -> FaceRequest {
        let spec = self.font_spec(role);
        let size_pt = spec.size_or(role.default_size());
        if spec.name.is_some() || spec.path.is_some() {
            FaceRequest {
                name: spec.name.clone(),
                path: spec.path.clone(),
                size_pt,
            }
        } else {
            FaceRequest {
                name: self.default_font_name.clone(),
                path: self.default_font_path.clone(),
                size_pt,
            }
        }
    }

    pub fn show_subtitle_text(&self) -> bool {
        self.show_subtitle && !self.subtitle.is_empty()
    }

    pub fn show_title_text(&self) -> bool {
        self.show_title && !self.title.is_empty()
    }
}
