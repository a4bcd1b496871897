// File: crates/spider-core/src/draw.rs
// Summary: Drawing surface abstraction, recorded draw commands and a transform stack for backends.
// Notes:
// - Coordinates are page millimeters, y up. Backends own the flip to device space.
// - `stroke`, `fill` and `fill_stroke` consume the current path.

use kurbo::{Affine, Point, Vec2};

use crate::color::Rgba;
use crate::text::FontHandle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Which part of the line box sits on the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// Sink for the ordered primitives emitted by the renderer.
pub trait DrawSurface {
    fn set_fill_color(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_stroke_width(&mut self, width: f64);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn close(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_stroke(&mut self);
    fn draw_text(
        &mut self,
        pos: Point,
        font: FontHandle,
        text: &str,
        anchor: TextAnchor,
        baseline: TextBaseline,
    );
    fn push_transform(&mut self);
    fn translate(&mut self, offset: Vec2);
    /// Counter-clockwise rotation in degrees.
    fn rotate(&mut self, degrees: f64);
    fn pop_transform(&mut self);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Rgba),
    SetStrokeColor(Rgba),
    SetStrokeWidth(f64),
    MoveTo(Point),
    LineTo(Point),
    Close,
    Stroke,
    Fill,
    FillStroke,
    DrawText {
        pos: Point,
        font: FontHandle,
        text: String,
        anchor: TextAnchor,
        baseline: TextBaseline,
    },
    PushTransform,
    Translate(Vec2),
    Rotate(f64),
    PopTransform,
}

/// A surface that just records what it is asked to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn replay(&self, surface: &mut dyn DrawSurface) {
        replay(&self.commands, surface);
    }
}

impl DrawSurface for CommandList {
    fn set_fill_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetStrokeWidth(width));
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn close(&mut self) {
        self.commands.push(DrawCommand::Close);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_stroke(&mut self) {
        self.commands.push(DrawCommand::FillStroke);
    }

    fn draw_text(
        &mut self,
        pos: Point,
        font: FontHandle,
        text: &str,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) {
        self.commands.push(DrawCommand::DrawText {
            pos,
            font,
            text: text.to_string(),
            anchor,
            baseline,
        });
    }

    fn push_transform(&mut self) {
        self.commands.push(DrawCommand::PushTransform);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::Rotate(degrees));
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
    }
}

/// Play recorded commands onto `surface` in order.
pub fn replay(commands: &[DrawCommand], surface: &mut dyn DrawSurface) {
    for cmd in commands {
        match cmd {
            DrawCommand::SetFillColor(c) => surface.set_fill_color(*c),
            DrawCommand::SetStrokeColor(c) => surface.set_stroke_color(*c),
            DrawCommand::SetStrokeWidth(w) => surface.set_stroke_width(*w),
            DrawCommand::MoveTo(p) => surface.move_to(*p),
            DrawCommand::LineTo(p) => surface.line_to(*p),
            DrawCommand::Close => surface.close(),
            DrawCommand::Stroke => surface.stroke(),
            DrawCommand::Fill => surface.fill(),
            DrawCommand::FillStroke => surface.fill_stroke(),
            DrawCommand::DrawText { pos, font, text, anchor, baseline } => {
                surface.draw_text(*pos, *font, text, *anchor, *baseline)
            }
            DrawCommand::PushTransform => surface.push_transform(),
            DrawCommand::Translate(v) => surface.translate(*v),
            DrawCommand::Rotate(d) => surface.rotate(*d),
            DrawCommand::PopTransform => surface.pop_transform(),
        }
    }
}

/// Current transform plus saved states, for backends that apply transforms themselves.
///
/// Local operations compose on the right, so the last `translate`/`rotate`
/// applies to coordinates first.
#[derive(Clone, Debug)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub fn new(base: Affine) -> Self {
        Self {
            current: base,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Affine {
        self.current
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed state; unbalanced pops leave the transform unchanged.
    pub fn pop(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine::translate(offset);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.current = self.current * Affine::rotate(degrees.to_radians());
    }

    pub fn apply(&self, p: Point) -> Point {
        self.current * p
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn replay_reproduces_commands() {
        let mut a = CommandList::new();
        a.set_stroke_width(0.5);
        a.move_to(Point::new(1.0, 2.0));
        a.line_to(Point::new(3.0, 4.0));
        a.stroke();
        a.draw_text(Point::ORIGIN, FontHandle(2), "x", TextAnchor::Middle, TextBaseline::Top);
        let mut b = CommandList::new();
        a.replay(&mut b);
        assert_eq!(a, b);
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn translate_then_rotate_applies_rotation_first() {
        let mut t = TransformStack::default();
        t.push();
        t.translate(Vec2::new(10.0, 10.0));
        t.rotate(90.0);
        let p = t.apply(Point::new(5.0, 0.0));
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 15.0, epsilon = 1e-12);
        t.pop();
        assert_eq!(t.apply(Point::new(5.0, 0.0)), Point::new(5.0, 0.0));
        t.pop();
        assert_eq!(t.depth(), 0);
    }
}
