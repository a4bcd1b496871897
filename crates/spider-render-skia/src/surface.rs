// File: crates/spider-render-skia/src/surface.rs
// Summary: DrawSurface over a Skia canvas; maps y-up millimeters to device pixels.
// Notes:
// - Path vertices are transformed when added, so a path survives transform changes.
// - Text is drawn in a local, y-down frame concatenated onto the canvas matrix.

use kurbo::{Affine, Point, Size, Vec2};
use skia_safe as skia;
use spider_core::{DrawSurface, FontHandle, Rgba, TextAnchor, TextBaseline, TransformStack};

use crate::fonts::SkiaFonts;

pub(crate) fn skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Page (mm, y up) to device (px, y down).
pub fn page_to_device(page: Size, px_per_mm: f64) -> Affine {
    Affine::new([px_per_mm, 0.0, 0.0, -px_per_mm, 0.0, page.height * px_per_mm])
}

fn to_matrix(t: Affine) -> skia::Matrix {
    let [a, b, c, d, e, f] = t.as_coeffs();
    skia::Matrix::new_all(
        a as f32, c as f32, e as f32, b as f32, d as f32, f as f32, 0.0, 0.0, 1.0,
    )
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    fonts: &'a SkiaFonts,
    transform: TransformStack,
    path: skia::PathBuilder,
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f64,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, fonts: &'a SkiaFonts, page: Size, px_per_mm: f64) -> Self {
        Self {
            canvas,
            fonts,
            transform: TransformStack::new(page_to_device(page, px_per_mm)),
            path: skia::PathBuilder::new(),
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            stroke_width: 1.0,
        }
    }

    fn device(&self, p: Point) -> (f32, f32) {
        let d = self.transform.apply(p);
        (d.x as f32, d.y as f32)
    }

    fn fill_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(skia_color(self.fill));
        paint
    }

    fn stroke_paint(&self) -> skia::Paint {
        let scale = self.transform.current().determinant().abs().sqrt();
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_stroke_width((self.stroke_width * scale) as f32);
        paint.set_color(skia_color(self.stroke));
        paint
    }

    fn take_path(&mut self) -> skia::Path {
        self.path.detach()
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn move_to(&mut self, p: Point) {
        let d = self.device(p);
        self.path.move_to(d);
    }

    fn line_to(&mut self, p: Point) {
        let d = self.device(p);
        self.path.line_to(d);
    }

    fn close(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let path = self.take_path();
        if self.stroke.is_transparent() || self.stroke_width <= 0.0 {
            return;
        }
        self.canvas.draw_path(&path, &self.stroke_paint());
    }

    fn fill(&mut self) {
        let path = self.take_path();
        if self.fill.is_transparent() {
            return;
        }
        self.canvas.draw_path(&path, &self.fill_paint());
    }

    fn fill_stroke(&mut self) {
        let path = self.take_path();
        if !self.fill.is_transparent() {
            self.canvas.draw_path(&path, &self.fill_paint());
        }
        if !self.stroke.is_transparent() && self.stroke_width > 0.0 {
            self.canvas.draw_path(&path, &self.stroke_paint());
        }
    }

    fn draw_text(
        &mut self,
        pos: Point,
        font: FontHandle,
        text: &str,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) {
        let Some(face) = self.fonts.face(font) else {
            return;
        };
        if text.is_empty() || self.fill.is_transparent() {
            return;
        }
        let (width, _) = face.font.measure_str(text, None);
        let (_, metrics) = face.font.metrics();
        let x = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        // local frame is y-down: ascent is negative, descent positive
        let y = match baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Top => -metrics.ascent,
            TextBaseline::Bottom => -metrics.descent,
            TextBaseline::Middle => -(metrics.ascent + metrics.descent) / 2.0,
        };
        let local = self.transform.current() * Affine::translate(pos.to_vec2()) * Affine::FLIP_Y;
        self.canvas.save();
        self.canvas.concat(&to_matrix(local));
        self.canvas.draw_str(text, (x, y), &face.font, &self.fill_paint());
        self.canvas.restore();
    }

    fn push_transform(&mut self) {
        self.transform.push();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform.translate(offset);
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform.rotate(degrees);
    }

    fn pop_transform(&mut self) {
        self.transform.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_origin_maps_to_bottom_left_pixel_edge() {
        let t = page_to_device(Size::new(100.0, 50.0), 2.0);
        assert_eq!(t * Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        assert_eq!(t * Point::new(100.0, 50.0), Point::new(200.0, 0.0));
    }

    #[test]
    fn matrix_matches_affine() {
        let t = Affine::translate((3.0, 4.0)) * Affine::rotate(0.5);
        let m = to_matrix(t);
        let p = m.map_point((1.0, 2.0));
        let q = t * Point::new(1.0, 2.0);
        assert!((f64::from(p.x) - q.x).abs() < 1e-5);
        assert!((f64::from(p.y) - q.y).abs() < 1e-5);
    }
}
