// File: crates/spider-core/src/region.rs
// Summary: Partition of the canvas into page, title, subtitle, plot and legend rectangles.
// Notes:
// - Page coordinates are millimeters with the origin at the bottom-left and y up.
// - A legend that needs more room than the gap beside the plot moves the plot away from it.

use kurbo::{Point, Rect, Size, Vec2};
use tracing::trace;

use crate::geometry::rect_ltrb;
use crate::options::{ChartOptions, LegendPlacement};
use crate::text::{FontOracle, FontSet};
use crate::types::LINE_HEIGHT_SLACK;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regions {
    pub page: Rect,
    pub title: Rect,
    pub subtitle: Rect,
    pub plot: Rect,
    /// Absent when the legend is hidden.
    pub legend: Option<Rect>,
}

impl Regions {
    pub fn plot_center(&self) -> Point {
        self.plot.center()
    }
}

fn cap(value: f64, max: Option<f64>) -> f64 {
    max.map_or(value, |m| value.min(m))
}

/// Size a legend against the gap the plot leaves for it. When the legend needs
/// more than the gap, returns the excess the plot must move away by.
fn fit(gap: f64, natural: f64, min: f64, max: Option<f64>) -> (f64, f64) {
    let size = cap(natural.max(min), max);
    (size, (size - gap).max(0.0))
}

pub fn allocate(
    canvas: Size,
    options: &ChartOptions,
    fonts: &FontSet,
    oracle: &dyn FontOracle,
) -> Regions {
    let (w, h) = (canvas.width, canvas.height);
    let margin = options.page_margin;
    let plot_opts = &options.plot_options;
    let legend_opts = &options.legend_options;

    let plot_w = w * plot_opts.scale;
    let plot_h = h * plot_opts.scale;
    let plot_x = (w - plot_w - margin) / 2.0;
    let plot_y = (h - plot_h - margin) / 2.0;

    let page = rect_ltrb(margin, margin, w - margin, h - margin);
    let mut plot = rect_ltrb(plot_x, plot_y, plot_x + plot_w, plot_y + plot_h);

    // The plot is only ever translated, never resized, so the radius stays inside it.
    let legend = if options.show_legend {
        let (min_h, max_h) = (legend_opts.min_height, legend_opts.max_height);
        let (min_w, max_w) = (legend_opts.min_width, legend_opts.max_width);
        let rect = match legend_opts.placement {
            LegendPlacement::Top => {
                let line = oracle.line_height(fonts.legend_label) * LINE_HEIGHT_SLACK;
                let natural = line + legend_opts.padding;
                let (height, shift) = fit(natural, natural, min_h, max_h);
                if shift > 0.0 {
                    trace!(shift, "moving plot down for top legend");
                    plot = plot - Vec2::new(0.0, shift);
                }
                let y0 = plot.y1 + plot_opts.margin;
                rect_ltrb(page.x0, y0, page.x1, y0 + height)
            }
            LegendPlacement::Bottom => {
                let gap = plot.y0 - plot_opts.margin - page.y0;
                let (height, shift) = fit(gap, gap, min_h, max_h);
                if shift > 0.0 {
                    trace!(shift, "moving plot up for bottom legend");
                    plot = plot + Vec2::new(0.0, shift);
                }
                rect_ltrb(page.x0, page.y0, page.x1, page.y0 + height)
            }
            LegendPlacement::Left => {
                let gap = plot.x0 - plot_opts.margin - page.x0;
                let (width, shift) = fit(gap, gap, min_w, max_w);
                if shift > 0.0 {
                    trace!(shift, "moving plot right for left legend");
                    plot = plot + Vec2::new(shift, 0.0);
                }
                rect_ltrb(page.x0, plot.y0, page.x0 + width, plot.y1)
            }
            LegendPlacement::Right => {
                let gap = page.x1 - plot.x1 - plot_opts.margin;
                let (width, shift) = fit(gap, gap, min_w, max_w);
                if shift > 0.0 {
                    trace!(shift, "moving plot left for right legend");
                    plot = plot - Vec2::new(shift, 0.0);
                }
                rect_ltrb(page.x1 - width, plot.y0, page.x1, plot.y1)
            }
        };
        Some(rect)
    } else {
        None
    };

    let subtitle_bottom = match legend {
        Some(r) if legend_opts.placement == LegendPlacement::Top => r.y1 + options.subtitle_margin,
        _ => plot.y1 + plot_opts.margin,
    };
    let subtitle_height = if options.show_subtitle_text() {
        oracle.line_height(fonts.subtitle) * LINE_HEIGHT_SLACK
    } else {
        0.0
    };
    let subtitle = rect_ltrb(page.x0, subtitle_bottom, page.x1, subtitle_bottom + subtitle_height);
    let title = rect_ltrb(page.x0, subtitle.y1 + options.title_margin, page.x1, page.y1);

    Regions {
        page,
        title,
        subtitle,
        plot,
        legend,
    }
}
