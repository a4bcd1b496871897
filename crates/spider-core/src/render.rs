// File: crates/spider-core/src/render.rs
// Summary: Walks a computed layout and emits draw calls in fixed order.
// Notes:
// - Order: background, title, subtitle, plot outline, axes, series, legend.
// - Axes are drawn in a local frame translated to the center and rotated by the axis angle.

use kurbo::{Point, Rect, Vec2};

use crate::axis::AxisGeometry;
use crate::chart::LayoutResult;
use crate::draw::{DrawSurface, TextAnchor, TextBaseline};
use crate::geometry::{circle_points, regular_polygon};
use crate::options::{ChartOptions, ConnectType, PointShape};
use crate::series::SeriesGeometry;

pub fn draw_layout(layout: &LayoutResult, options: &ChartOptions, surface: &mut dyn DrawSurface) {
    draw_background(layout, options, surface);
    draw_titles(layout, options, surface);
    draw_plot_outline(layout, options, surface);
    for axis in &layout.axes {
        draw_axis(axis, layout, options, surface);
    }
    for series in &layout.series {
        draw_series(series, surface);
    }
    draw_legend(layout, options, surface);
}

// ---- helpers ----------------------------------------------------------------

fn polygon_path(surface: &mut dyn DrawSurface, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.close();
}

fn rect_corners(r: Rect) -> Vec<Point> {
    vec![
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
    ]
}

fn marker_points(shape: PointShape, at: Point, size: f64) -> Vec<Point> {
    let half = size / 2.0;
    match shape {
        PointShape::Circle => circle_points(at, half),
        PointShape::Square => rect_corners(Rect::from_center_size(at, (size, size))),
        PointShape::Triangle => regular_polygon(at, half, 3, 90.0),
        PointShape::Diamond => regular_polygon(at, half, 4, 90.0),
        PointShape::None => Vec::new(),
    }
}

fn draw_marker(
    surface: &mut dyn DrawSurface,
    shape: PointShape,
    at: Point,
    size: f64,
    outlined: bool,
) {
    let pts = marker_points(shape, at, size);
    if pts.is_empty() {
        return;
    }
    polygon_path(surface, &pts);
    if outlined {
        surface.fill_stroke();
    } else {
        surface.fill();
    }
}

// ---- passes -----------------------------------------------------------------

fn draw_background(layout: &LayoutResult, options: &ChartOptions, surface: &mut dyn DrawSurface) {
    surface.set_fill_color(options.background);
    polygon_path(surface, &rect_corners(layout.canvas.to_rect()));
    surface.fill();
}

fn draw_titles(layout: &LayoutResult, options: &ChartOptions, surface: &mut dyn DrawSurface) {
    let r = &layout.regions;
    if options.show_title_text() {
        surface.set_fill_color(options.title_style.color());
        let pos = Point::new(r.title.center().x, r.title.y0);
        let (anchor, baseline) = (TextAnchor::Middle, TextBaseline::Bottom);
        surface.draw_text(pos, layout.fonts.title, &options.title, anchor, baseline);
    }
    if options.show_subtitle_text() {
        surface.set_fill_color(options.subtitle_style.color());
        let pos = Point::new(r.subtitle.center().x, r.subtitle.y1);
        let (anchor, baseline) = (TextAnchor::Middle, TextBaseline::Top);
        surface.draw_text(pos, layout.fonts.subtitle, &options.subtitle, anchor, baseline);
    }
}

fn draw_plot_outline(layout: &LayoutResult, options: &ChartOptions, surface: &mut dyn DrawSurface) {
    let plot = &options.plot_options;
    let points = match plot.connect_type {
        ConnectType::Circle => circle_points(layout.center, layout.radius),
        ConnectType::Polygon => {
            regular_polygon(layout.center, layout.radius, layout.axes.len(), 90.0)
        }
    };
    surface.set_stroke_color(plot.outline_color);
    surface.set_stroke_width(plot.outline_thickness);
    polygon_path(surface, &points);
    surface.stroke();
}

fn draw_axis(
    axis: &AxisGeometry,
    layout: &LayoutResult,
    options: &ChartOptions,
    surface: &mut dyn DrawSurface,
) {
    let opts = &options.axis_options;
    let radius = layout.radius;

    surface.push_transform();
    surface.translate(layout.center.to_vec2());
    surface.rotate(axis.angle_deg);
    surface.set_stroke_color(opts.line_color);

    if opts.show_axis {
        surface.set_stroke_width(opts.line_thickness);
        surface.move_to(Point::ORIGIN);
        surface.line_to(Point::new(radius, 0.0));
        surface.stroke();
    }

    if options.show_axis_names {
        surface.push_transform();
        surface.translate(Vec2::new(radius + opts.label_offset, 0.0));
        surface.rotate(axis.label_rotation());
        surface.set_fill_color(opts.label_style.color());
        let (anchor, baseline) = (TextAnchor::Middle, TextBaseline::Alphabetic);
        surface.draw_text(Point::ORIGIN, layout.fonts.axis_label, &axis.name, anchor, baseline);
        surface.pop_transform();
    }

    let half_major = opts.major_tick_length / 2.0;
    if options.show_ticks {
        surface.set_stroke_width(opts.major_tick_line_thickness);
        for tick in axis.major_ticks() {
            surface.move_to(Point::new(tick.radius, -half_major));
            surface.line_to(Point::new(tick.radius, half_major));
            surface.stroke();
        }
    }
    if options.show_tick_labels {
        surface.set_fill_color(opts.tick_label_style.color());
        for tick in axis.major_ticks() {
            surface.push_transform();
            surface.translate(Vec2::new(tick.radius, -half_major - opts.label_offset));
            surface.rotate(-axis.angle_deg);
            let (font, label) = (layout.fonts.tick_label, tick.label());
            let (anchor, baseline) = (TextAnchor::Middle, TextBaseline::Middle);
            surface.draw_text(Point::ORIGIN, font, &label, anchor, baseline);
            surface.pop_transform();
        }
    }
    if options.show_ticks {
        let half_minor = opts.minor_tick_length / 2.0;
        surface.set_stroke_width(opts.minor_tick_line_thickness);
        for tick in axis.minor_ticks() {
            surface.move_to(Point::new(tick.radius, -half_minor));
            surface.line_to(Point::new(tick.radius, half_minor));
            surface.stroke();
        }
    }

    surface.pop_transform();
}

fn draw_series(series: &SeriesGeometry, surface: &mut dyn DrawSurface) {
    let style = &series.style;
    if style.has_fill() {
        surface.set_fill_color(style.fill_color);
        polygon_path(surface, &series.points);
        surface.fill();
    }
    if style.line_thickness > 0.0 {
        surface.set_stroke_color(style.line_color);
        surface.set_stroke_width(style.line_thickness);
        polygon_path(surface, &series.points);
        surface.stroke();
    }
    if !series.markers.is_empty() && style.has_markers() {
        let outlined = style.point_line_thickness > 0.0;
        surface.set_fill_color(style.point_fill_color);
        surface.set_stroke_color(style.point_stroke_color);
        surface.set_stroke_width(style.point_line_thickness);
        for p in &series.markers {
            draw_marker(surface, style.point_shape, *p, style.point_size, outlined);
        }
    }
}

fn draw_legend(layout: &LayoutResult, options: &ChartOptions, surface: &mut dyn DrawSurface) {
    let Some(rect) = layout.regions.legend else {
        return;
    };
    let opts = &options.legend_options;

    if opts.show_outline {
        surface.set_stroke_color(opts.outline_color);
        surface.set_stroke_width(opts.outline_thickness);
        polygon_path(surface, &rect_corners(rect));
        surface.stroke();
    }

    for row in &layout.legend_rows {
        for entry in &row.entries {
            let Some(series) = layout.series.get(entry.series_index) else {
                continue;
            };
            let style = &series.style;
            let start = row.sample_start(entry);
            let end = start + Vec2::new(opts.line_length, 0.0);

            surface.set_stroke_color(style.line_color);
            surface.set_stroke_width(opts.line_thickness);
            surface.move_to(start);
            surface.line_to(end);
            surface.stroke();

            if options.show_point_markers && style.has_markers() {
                surface.set_fill_color(style.point_fill_color);
                surface.set_stroke_color(style.point_stroke_color);
                surface.set_stroke_width(style.point_line_thickness);
                let mid = start.midpoint(end);
                let outlined = style.point_line_thickness > 0.0;
                draw_marker(surface, style.point_shape, mid, style.point_size, outlined);
            }

            surface.set_fill_color(opts.style.color());
            let label_pos = Point::new(entry.x + entry.sample_width, row.mid_y);
            let (anchor, baseline) = (TextAnchor::Start, TextBaseline::Middle);
            surface.draw_text(label_pos, layout.fonts.legend_label, &entry.label, anchor, baseline);
        }
    }
}
