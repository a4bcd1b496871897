// File: crates/spider-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use spider_core::{Chart, Rgba};
use spider_render_skia::{render_rgba8, RenderOptions};

fn chart() -> Chart {
    let mut chart = Chart::new();
    for a in ["a", "b", "c"] {
        chart.add_axis_with_max(a, 4.0).unwrap();
    }
    chart.add_series("s", [("a", 4.0), ("b", 4.0), ("c", 4.0)]).unwrap();
    // avoid font variance
    chart.options.show_legend = false;
    chart.options.show_axis_names = false;
    chart.options.show_tick_labels = false;
    chart
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { dpi: 50.8 };
    let (px, w, h, stride) = render_rgba8(&chart(), &opts).expect("rgba render");
    assert_eq!((w, h), (400, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // white background, opaque
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn background_color_fills_the_page() {
    let mut chart = chart();
    chart.options.background = Rgba::rgb(10, 20, 30);
    let opts = RenderOptions { dpi: 25.4 };
    let (px, w, h, stride) = render_rgba8(&chart, &opts).expect("rgba render");
    let last = (h as usize - 1) * stride + (w as usize - 1) * 4;
    assert_eq!(&px[last..last + 4], &[10, 20, 30, 255]);
}

#[test]
fn plot_center_is_painted() {
    // the series fill covers the center of the plot
    let opts = RenderOptions { dpi: 50.8 };
    let (px, w, _, stride) = render_rgba8(&chart(), &opts).expect("rgba render");
    let c = (w / 2) as usize;
    let i = c * stride + c * 4;
    assert_ne!(&px[i..i + 3], &[255, 255, 255]);
}

#[test]
fn zero_dpi_is_rejected() {
    assert!(render_rgba8(&chart(), &RenderOptions { dpi: 0.0 }).is_err());
}
