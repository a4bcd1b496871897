// File: crates/spider-core/src/geometry.rs
// Summary: Lightweight geometry helpers on top of kurbo (regions, polar points, flattened shapes).

use kurbo::{Circle, PathEl, Point, Rect, Shape};

use crate::types::FLATTEN_TOLERANCE;

/// Rectangle from edges, collapsing inverted spans so `x1 >= x0` and `y1 >= y0`.
#[inline]
pub fn rect_ltrb(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1.max(x0), y1.max(y0))
}

/// Point at `radius` from `center` along `angle_deg` (counter-clockwise from +x, y up).
#[inline]
pub fn polar(center: Point, radius: f64, angle_deg: f64) -> Point {
    let t = angle_deg.to_radians();
    Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
}

/// Vertices of a regular `n`-gon whose first vertex sits at `start_deg`.
pub fn regular_polygon(center: Point, radius: f64, n: usize, start_deg: f64) -> Vec<Point> {
    let dt = 360.0 / n as f64;
    (0..n).map(|i| polar(center, radius, start_deg + i as f64 * dt)).collect()
}

/// A circle flattened into a closed polyline.
pub fn circle_points(center: Point, radius: f64) -> Vec<Point> {
    let mut out = Vec::new();
    let path = Circle::new(center, radius).path_elements(FLATTEN_TOLERANCE);
    kurbo::flatten(path, FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => out.push(p),
        _ => {}
    });
    // flatten repeats the start point before closing
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}
