// File: crates/spider-core/src/theme.rs
// Summary: Default series palette, marker cycle and resolved per-series style.

use crate::color::Rgba;
use crate::options::PointShape;

/// Default series colors, cycled by series index.
pub const DEFAULT_PALETTE: [Rgba; 5] = [
    Rgba::rgb(0x67, 0x7a, 0xd1),
    Rgba::rgb(0x6f, 0xac, 0x5d),
    Rgba::rgb(0xb9, 0x46, 0x63),
    Rgba::rgb(0x97, 0x50, 0xa1),
    Rgba::rgb(0xbc, 0x7d, 0x39),
];

pub const DEFAULT_POINT_MARKERS: [PointShape; 4] = [
    PointShape::Circle,
    PointShape::Square,
    PointShape::Triangle,
    PointShape::Diamond,
];

pub fn default_palette() -> Vec<Rgba> {
    DEFAULT_PALETTE.to_vec()
}

/// Palette color for series `index`; an empty palette falls back to the default one.
pub fn palette_color(colors: &[Rgba], index: usize) -> Rgba {
    if colors.is_empty() {
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    } else {
        colors[index % colors.len()]
    }
}

/// Marker for series `index`; an empty list falls back to the default cycle.
pub fn palette_marker(markers: &[PointShape], index: usize) -> PointShape {
    if markers.is_empty() {
        DEFAULT_POINT_MARKERS[index % DEFAULT_POINT_MARKERS.len()]
    } else {
        markers[index % markers.len()]
    }
}

/// Fully resolved drawing style of one series. Opacities are already folded into the colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub line_color: Rgba,
    pub line_thickness: f64,
    pub fill_color: Rgba,
    pub point_shape: PointShape,
    pub point_size: f64,
    pub point_line_thickness: f64,
    pub point_stroke_color: Rgba,
    pub point_fill_color: Rgba,
}

impl SeriesStyle {
    pub fn has_fill(&self) -> bool {
        self.fill_color.a > 0
    }

    pub fn has_markers(&self) -> bool {
        self.point_shape != PointShape::None && self.point_size > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_and_falls_back() {
        let two = [Rgba::BLACK, Rgba::WHITE];
        assert_eq!(palette_color(&two, 3), Rgba::WHITE);
        assert_eq!(palette_color(&[], 6), DEFAULT_PALETTE[1]);
        assert_eq!(palette_marker(&[], 5), PointShape::Square);
        assert_eq!(palette_marker(&[PointShape::None], 9), PointShape::None);
    }
}
