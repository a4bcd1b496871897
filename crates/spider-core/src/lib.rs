// File: crates/spider-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, layout engine and drawing interfaces.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod options;
pub mod region;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod validate;

pub use axis::{Axis, AxisGeometry, Tick};
pub use chart::{Chart, ChartData, LayoutResult};
pub use color::Rgba;
pub use draw::{
    replay, CommandList, DrawCommand, DrawSurface, TextAnchor, TextBaseline, TransformStack,
};
pub use error::{ConfigError, FontLoadError, SpiderError, SpiderResult, ValidationError};
pub use legend::{LegendEntry, LegendRow};
pub use options::{
    AxisOptions, ChartOptions, ConnectType, FontSpec, LegendOptions, LegendPlacement, PlotOptions,
    PointShape, SeriesOptions,
};
pub use region::Regions;
pub use scale::ScaleType;
pub use series::{Series, SeriesGeometry};
pub use text::{FaceRequest, FontHandle, FontOracle, FontRole, FontSet, HeuristicFontOracle};
pub use theme::SeriesStyle;
