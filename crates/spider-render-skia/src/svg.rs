// File: crates/spider-render-skia/src/svg.rs
// Summary: DrawSurface that writes SVG markup in millimeter page units.
// Notes:
// - Path data is emitted in page coordinates after the current transform; text keeps a matrix.
// - Font family and size come from the same SkiaFonts used for layout.

use std::fmt::Write as _;

use kurbo::{Affine, Point, Size, Vec2};
use spider_core::{DrawSurface, FontHandle, Rgba, TextAnchor, TextBaseline, TransformStack};

use crate::fonts::SkiaFonts;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct SvgSurface<'a> {
    fonts: &'a SkiaFonts,
    out: String,
    transform: TransformStack,
    path: String,
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f64,
}

impl<'a> SvgSurface<'a> {
    pub fn new(fonts: &'a SkiaFonts, page: Size) -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = num(page.width),
            h = num(page.height),
        );
        Self {
            fonts,
            out,
            // flip to y-down document space
            transform: TransformStack::new(Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, page.height])),
            path: String::new(),
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            stroke_width: 1.0,
        }
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    fn push_point(&mut self, cmd: char, p: Point) {
        let d = self.transform.apply(p);
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        let _ = write!(self.path, "{cmd}{} {}", num(d.x), num(d.y));
    }

    fn stroke_width_px(&self) -> f64 {
        self.stroke_width * self.transform.current().determinant().abs().sqrt()
    }

    fn emit_path(&mut self, fill: bool, stroke: bool) {
        let d = std::mem::take(&mut self.path);
        let fill = fill && !self.fill.is_transparent();
        let stroke = stroke && !self.stroke.is_transparent() && self.stroke_width > 0.0;
        if d.is_empty() || !(fill || stroke) {
            return;
        }
        let _ = write!(self.out, r#"<path d="{d}""#);
        if fill {
            write_paint_attr(&mut self.out, "fill", self.fill);
        } else {
            self.out.push_str(r#" fill="none""#);
        }
        if stroke {
            write_paint_attr(&mut self.out, "stroke", self.stroke);
            let width = num(self.stroke_width_px());
            let _ = write!(self.out, r#" stroke-width="{width}" stroke-linejoin="round""#);
        }
        self.out.push_str("/>\n");
    }
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Rgba) {
    let _ = write!(out, r#" {name}="{}""#, color.to_hex_rgb());
    if color.a < 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, num(color.opacity()));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl DrawSurface for SvgSurface<'_> {
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
        self.push_point('M', p);
    }

    fn line_to(&mut self, p: Point) {
        self.push_point('L', p);
    }

    fn close(&mut self) {
        self.path.push_str(" Z");
    }

    fn stroke(&mut self) {
        self.emit_path(false, true);
    }

    fn fill(&mut self) {
        self.emit_path(true, false);
    }

    fn fill_stroke(&mut self) {
        self.emit_path(true, true);
    }

    fn draw_text(
        &mut self,
        pos: Point,
        font: FontHandle,
        text: &str,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) {
        if text.is_empty() || self.fill.is_transparent() {
            return;
        }
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match baseline {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "text-after-edge",
        };
        let local = self.transform.current() * Affine::translate(pos.to_vec2()) * Affine::FLIP_Y;
        let [a, b, c, d, e, f] = local.as_coeffs();
        let _ = write!(
            self.out,
            concat!(
                r#"<text transform="matrix({} {} {} {} {} {})" font-family="{}" font-size="{}""#,
                r#" text-anchor="{}" dominant-baseline="{}""#,
            ),
            num(a),
            num(b),
            num(c),
            num(d),
            num(e),
            num(f),
            escape_xml(self.fonts.family(font)),
            num(self.fonts.size_mm(font)),
            anchor,
            baseline,
        );
        write_paint_attr(&mut self.out, "fill", self.fill);
        let _ = writeln!(self.out, ">{}</text>", escape_xml(text));
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
