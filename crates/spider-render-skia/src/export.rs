// File: crates/spider-render-skia/src/export.rs
// Summary: Headless export of a chart to PNG bytes, RGBA8 pixels, SVG text or a file on disk.
// Notes:
// - The chart is laid out once into a command list, then replayed onto the target surface.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;
use spider_core::{replay, Chart, DrawCommand};
use tracing::info;

use crate::fonts::SkiaFonts;
use crate::surface::SkiaSurface;
use crate::svg::SvgSurface;

const MM_PER_INCH: f64 = 25.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Raster resolution; the page size itself is fixed in millimeters by the chart.
    pub dpi: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: 96.0 }
    }
}

impl RenderOptions {
    pub fn px_per_mm(&self) -> f64 {
        self.dpi / MM_PER_INCH
    }

    /// Pixel dimensions for a chart at this resolution.
    pub fn pixel_size(&self, chart: &Chart) -> (i32, i32) {
        let page = chart.canvas_size();
        let ppm = self.px_per_mm();
        let px = |mm: f64| (mm * ppm).round().max(1.0) as i32;
        (px(page.width), px(page.height))
    }
}

fn record(chart: &Chart) -> Result<(SkiaFonts, Vec<DrawCommand>)> {
    let mut fonts = SkiaFonts::new();
    let commands = chart.render_commands(&mut fonts)?;
    Ok((fonts, commands))
}

fn rasterize(chart: &Chart, opts: &RenderOptions) -> Result<skia::Surface> {
    if !(opts.dpi.is_finite() && opts.dpi > 0.0) {
        bail!("dpi must be positive, got {}", opts.dpi);
    }
    let (fonts, commands) = record(chart)?;
    let (w, h) = opts.pixel_size(chart);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        let mut target = SkiaSurface::new(canvas, &fonts, chart.canvas_size(), opts.px_per_mm());
        replay(&commands, &mut target);
    }
    Ok(surface)
}

/// Render to an in-memory PNG.
pub fn render_png_bytes(chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(chart, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("failed to encode PNG"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
pub fn render_rgba8(chart: &Chart, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(chart, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new(
        (w, h),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        bail!("failed to read back {w}x{h} pixels");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

/// Render to an SVG document sized in millimeters.
pub fn render_svg_string(chart: &Chart) -> Result<String> {
    let (fonts, commands) = record(chart)?;
    let mut target = SvgSurface::new(&fonts, chart.canvas_size());
    replay(&commands, &mut target);
    Ok(target.finish())
}

/// Write `chart` to `path`; the extension (`png` or `svg`) picks the format.
pub fn save(chart: &Chart, path: impl AsRef<Path>, opts: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    let bytes = match ext.as_deref() {
        Some("png") => render_png_bytes(chart, opts)?,
        Some("svg") => render_svg_string(chart)?.into_bytes(),
        _ => bail!("unsupported output format for {} (expected .png or .svg)", path.display()),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "chart written");
    Ok(())
}
