// File: crates/spider-core/src/text.rs
// Summary: Font oracle interface for face loading and text metrics, plus a heuristic oracle.

use std::fmt;

use crate::error::FontLoadError;
use crate::types::{
    DEFAULT_AXIS_LABEL_FONT_SIZE, DEFAULT_LEGEND_FONT_SIZE, DEFAULT_SUBTITLE_FONT_SIZE,
    DEFAULT_TICK_LABEL_FONT_SIZE, DEFAULT_TITLE_FONT_SIZE, MM_PER_PT,
};

/// The five text roles a chart needs a face for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Subtitle,
    AxisLabel,
    TickLabel,
    LegendLabel,
}

impl FontRole {
    /// Size in points used when the role's style leaves it unset.
    pub fn default_size(self) -> f64 {
        match self {
            FontRole::Title => DEFAULT_TITLE_FONT_SIZE,
            FontRole::Subtitle => DEFAULT_SUBTITLE_FONT_SIZE,
            FontRole::AxisLabel => DEFAULT_AXIS_LABEL_FONT_SIZE,
            FontRole::TickLabel => DEFAULT_TICK_LABEL_FONT_SIZE,
            FontRole::LegendLabel => DEFAULT_LEGEND_FONT_SIZE,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FontRole::Title => "title",
            FontRole::Subtitle => "subtitle",
            FontRole::AxisLabel => "axis label",
            FontRole::TickLabel => "tick label",
            FontRole::LegendLabel => "legend label",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Opaque handle to a face loaded by a [`FontOracle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle(pub usize);

/// What to load: an optional family name, an optional file path, and a size in points.
///
/// Neither set means "the oracle's default face".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceRequest {
    pub name: Option<String>,
    pub path: Option<String>,
    pub size_pt: f64,
}

impl FaceRequest {
    /// Human-readable identifier used in errors and logs.
    pub fn describe(&self) -> String {
        match (&self.name, &self.path) {
            (_, Some(p)) => p.clone(),
            (Some(n), None) => n.clone(),
            (None, None) => "<default>".to_string(),
        }
    }
}

/// Handles for every role, produced by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSet {
    pub title: FontHandle,
    pub subtitle: FontHandle,
    pub axis_label: FontHandle,
    pub tick_label: FontHandle,
    pub legend_label: FontHandle,
}

/// Loads faces and answers metric queries. All lengths are millimeters.
pub trait FontOracle {
    fn load_face(&mut self, request: &FaceRequest) -> Result<FontHandle, FontLoadError>;
    fn line_height(&self, font: FontHandle) -> f64;
    fn measure_text(&self, font: FontHandle, text: &str) -> f64;
}

/// Metric-free oracle: every glyph advances 0.6 em and lines are 1.2 em tall.
///
/// Useful for layout tests and for backends without font access. Path
/// requests are accepted without touching the filesystem.
#[derive(Clone, Debug, Default)]
pub struct HeuristicFontOracle {
    sizes: Vec<f64>,
}

impl HeuristicFontOracle {
    pub const ADVANCE_EM: f64 = 0.6;
    pub const LINE_HEIGHT_EM: f64 = 1.2;

    pub fn new() -> Self {
        Self::default()
    }

    fn em(&self, font: FontHandle) -> f64 {
        self.sizes.get(font.0).copied().unwrap_or(0.0) * MM_PER_PT
    }
}

impl FontOracle for HeuristicFontOracle {
    fn load_face(&mut self, request: &FaceRequest) -> Result<FontHandle, FontLoadError> {
        if !request.size_pt.is_finite() || request.size_pt <= 0.0 {
            let reason = format!("invalid size {}pt", request.size_pt);
            return Err(FontLoadError::new(request.describe(), reason));
        }
        self.sizes.push(request.size_pt);
        Ok(FontHandle(self.sizes.len() - 1))
    }

    fn line_height(&self, font: FontHandle) -> f64 {
        self.em(font) * Self::LINE_HEIGHT_EM
    }

    fn measure_text(&self, font: FontHandle, text: &str) -> f64 {
        self.em(font) * Self::ADVANCE_EM * text.chars().count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn heuristic_metrics_scale_with_size() {
        let mut o = HeuristicFontOracle::new();
        let request = FaceRequest {
            size_pt: 10.0,
            ..Default::default()
        };
        let h = o.load_face(&request).unwrap();
        assert_relative_eq!(o.line_height(h), 10.0 * MM_PER_PT * 1.2);
        assert_relative_eq!(o.measure_text(h, "abcd"), 4.0 * 10.0 * MM_PER_PT * 0.6);
        assert_eq!(o.measure_text(h, ""), 0.0);
    }

    #[test]
    fn heuristic_rejects_nonpositive_size() {
        let mut o = HeuristicFontOracle::new();
        let err = o.load_face(&FaceRequest {
            name: Some("Serif".into()),
            size_pt: 0.0,
            ..Default::default()
        });
        assert_eq!(err.unwrap_err().face, "Serif");
    }
}
