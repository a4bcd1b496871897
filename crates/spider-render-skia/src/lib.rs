// File: crates/spider-render-skia/src/lib.rs
// Summary: Skia renderer crate; font oracle, raster and SVG surfaces, and PNG/SVG export.

pub mod export;
pub mod fonts;
pub mod surface;
pub mod svg;

pub use export::{render_png_bytes, render_rgba8, render_svg_string, save, RenderOptions};
pub use fonts::SkiaFonts;
pub use surface::SkiaSurface;
pub use svg::SvgSurface;
