// File: crates/spider-render-skia/src/fonts.rs
// Summary: Font oracle backed by Skia's system font manager.
// Notes:
// - Fonts are sized in millimeters so measurements come back in page units.
// - Default requests try preferred families, then the platform default. With neither
//   available the load fails.

use skia_safe as skia;
use spider_core::types::MM_PER_PT;
use spider_core::{FaceRequest, FontHandle, FontLoadError, FontOracle};
use tracing::{debug, warn};

/// Families tried, in order, for requests that name no face.
const FALLBACK_FAMILIES: [&str; 5] =
    ["Liberation Sans", "DejaVu Sans", "Helvetica", "Arial", "sans-serif"];

pub struct LoadedFace {
    pub font: skia::Font,
    pub family: String,
    /// Em size in millimeters.
    pub size_mm: f64,
}

pub struct SkiaFonts {
    mgr: skia::FontMgr,
    faces: Vec<LoadedFace>,
}

impl SkiaFonts {
    pub fn new() -> Self {
        Self::with_font_mgr(skia::FontMgr::default())
    }

    pub fn with_font_mgr(mgr: skia::FontMgr) -> Self {
        Self {
            mgr,
            faces: Vec::new(),
        }
    }

    pub fn face(&self, handle: FontHandle) -> Option<&LoadedFace> {
        self.faces.get(handle.0)
    }

    pub fn family(&self, handle: FontHandle) -> &str {
        self.face(handle).map_or("sans-serif", |f| f.family.as_str())
    }

    pub fn size_mm(&self, handle: FontHandle) -> f64 {
        self.face(handle).map_or(0.0, |f| f.size_mm)
    }

    fn typeface_from_file(&self, path: &str) -> Result<skia::Typeface, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|e| FontLoadError::new(path, e.to_string()))?;
        self.mgr
            .new_from_data(skia::Data::new_copy(&bytes), None)
            .ok_or_else(|| FontLoadError::new(path, "not a font file Skia can read"))
    }

    fn typeface_by_name(&self, name: &str) -> Result<skia::Typeface, FontLoadError> {
        self.mgr
            .match_family_style(name, skia::FontStyle::normal())
            .ok_or_else(|| FontLoadError::new(name, "no installed family with that name"))
    }

    fn default_typeface(&self) -> Option<skia::Typeface> {
        FALLBACK_FAMILIES
            .iter()
            .find_map(|family| self.mgr.match_family_style(family, skia::FontStyle::normal()))
            .or_else(|| self.mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()))
    }
}

impl Default for SkiaFonts {
    fn default() -> Self {
        Self::new()
    }
}

fn make_font(typeface: skia::Typeface, size_mm: f64) -> skia::Font {
    let mut font = skia::Font::from_typeface(typeface, size_mm as f32);
    // glyphs are scaled by the canvas matrix, so avoid hinting at millimeter sizes
    font.set_subpixel(true);
    font.set_linear_metrics(true);
    font
}

impl FontOracle for SkiaFonts {
    fn load_face(&mut self, request: &FaceRequest) -> Result<FontHandle, FontLoadError> {
        if !(request.size_pt.is_finite() && request.size_pt > 0.0) {
            let reason = format!("invalid size {}pt", request.size_pt);
            return Err(FontLoadError::new(request.describe(), reason));
        }
        let size_mm = request.size_pt * MM_PER_PT;
        let typeface = match (&request.path, &request.name) {
            (Some(path), _) => self.typeface_from_file(path)?,
            (None, Some(name)) => self.typeface_by_name(name)?,
            (None, None) => self.default_typeface().ok_or_else(|| {
                warn!("no system font available");
                FontLoadError::new(request.describe(), "no usable system font")
            })?,
        };
        let family = typeface.family_name();
        debug!(face = %request.describe(), %family, size_pt = request.size_pt, "loaded font face");
        self.faces.push(LoadedFace {
            font: make_font(typeface, size_mm),
            family,
            size_mm,
        });
        Ok(FontHandle(self.faces.len() - 1))
    }

    fn line_height(&self, font: FontHandle) -> f64 {
        self.face(font).map_or(0.0, |f| f64::from(f.font.spacing()))
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> f64 {
        self.face(font).map_or(0.0, |f| f64::from(f.font.measure_str(text, None).0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size_pt: f64) -> FaceRequest {
        FaceRequest {
            size_pt,
            ..Default::default()
        }
    }

    #[test]
    fn default_request_always_loads() {
        let mut fonts = SkiaFonts::new();
        let h = fonts.load_face(&sized(12.0)).expect("default face");
        assert!((fonts.size_mm(h) - 12.0 * MM_PER_PT).abs() < 1e-12);
        assert!(fonts.line_height(h) >= 0.0);
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let mut fonts = SkiaFonts::new();
        let req = FaceRequest {
            path: Some("/definitely/not/here.ttf".into()),
            ..sized(10.0)
        };
        let err = fonts.load_face(&req).unwrap_err();
        assert_eq!(err.face, "/definitely/not/here.ttf");
    }

    #[test]
    fn default_request_without_any_font_is_an_error() {
        let mut fonts = SkiaFonts::with_font_mgr(skia::FontMgr::empty());
        let err = fonts.load_face(&sized(12.0)).unwrap_err();
        assert_eq!(err.face, "<default>");
        assert!(err.reason.contains("no usable system font"));
        assert!(fonts.face(FontHandle(0)).is_none());
    }

    #[test]
    fn chart_without_fonts_fails_validation() {
        let mut chart = spider_core::Chart::new();
        for a in ["a", "b", "c"] {
            chart.add_axis(a).unwrap();
        }
        let mut fonts = SkiaFonts::with_font_mgr(skia::FontMgr::empty());
        match chart.render_commands(&mut fonts) {
            Err(spider_core::SpiderError::FontLoad { role, .. }) => {
                assert_eq!(role, spider_core::FontRole::Title)
            }
            other => panic!("expected font error, got {other:?}"),
        }
    }
}
