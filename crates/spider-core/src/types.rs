// File: crates/spider-core/src/types.rs
// Summary: Shared constants (limits, default sizes in millimeters, font sizes in points).

/// Minimum number of axes a chart must have.
pub const MIN_AXES: usize = 3;
/// Maximum number of axes a chart may have.
pub const MAX_AXES: usize = 50;
/// Maximum number of series a chart may have.
pub const MAX_SERIES: usize = 20;

/// Default canvas width in millimeters.
pub const DEFAULT_CHART_WIDTH: f64 = 200.0;
/// Default canvas height in millimeters.
pub const DEFAULT_CHART_HEIGHT: f64 = 200.0;

/// Multiplier applied to the observed maximum when an axis autoscales.
pub const AUTOSCALE_PADDING_FACTOR: f64 = 1.15;

pub const DEFAULT_PAGE_MARGIN: f64 = 3.0;
pub const DEFAULT_PLOT_SCALE: f64 = 0.6;
pub const DEFAULT_PLOT_MARGIN: f64 = 3.0;
pub const DEFAULT_PLOT_PADDING: f64 = 5.0;
pub const DEFAULT_PLOT_OUTLINE_THICKNESS: f64 = 1.0;
pub const DEFAULT_TITLE_MARGIN: f64 = 3.0;
pub const DEFAULT_SUBTITLE_MARGIN: f64 = 3.0;

pub const DEFAULT_LABEL_OFFSET: f64 = 3.0;
pub const DEFAULT_MAJOR_TICK_COUNT: usize = 5;
pub const DEFAULT_MINOR_TICK_COUNT: usize = 2;
pub const DEFAULT_MAJOR_TICK_LENGTH: f64 = 2.0;
pub const DEFAULT_MINOR_TICK_LENGTH: f64 = 1.0;
pub const DEFAULT_AXIS_LINE_THICKNESS: f64 = 0.75;
pub const DEFAULT_MAJOR_TICK_LINE_THICKNESS: f64 = 0.5;
pub const DEFAULT_MINOR_TICK_LINE_THICKNESS: f64 = 0.25;

pub const DEFAULT_SERIES_LINE_THICKNESS: f64 = 0.75;
pub const DEFAULT_POINT_SIZE: f64 = 2.0;
pub const DEFAULT_FILL_OPACITY: f64 = 0.25;
pub const DEFAULT_POINT_FILL_OPACITY: f64 = 1.0;

pub const DEFAULT_LEGEND_LINE_LENGTH: f64 = 7.0;
pub const DEFAULT_LEGEND_LINE_THICKNESS: f64 = 0.6;
pub const DEFAULT_LEGEND_OUTLINE_THICKNESS: f64 = 0.5;
pub const DEFAULT_LEGEND_PADDING: f64 = 2.0;
/// Share of the legend width a row may fill before wrapping.
pub const LEGEND_WRAP_FRACTION: f64 = 0.85;

pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 18.0;
pub const DEFAULT_SUBTITLE_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_LEGEND_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_AXIS_LABEL_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_TICK_LABEL_FONT_SIZE: f64 = 8.0;

/// Millimeters per typographic point.
pub const MM_PER_PT: f64 = 0.352_777_777_777_777_8;

/// Slack applied to line heights so rounding never clips a glyph.
pub const LINE_HEIGHT_SLACK: f64 = 1.000_000_001;

/// Markers closer than this to the plot center are not drawn.
pub const MARKER_CENTER_EPSILON: f64 = 0.1;

/// Flattening tolerance (mm) used when circles become line segments.
pub const FLATTEN_TOLERANCE: f64 = 0.01;
