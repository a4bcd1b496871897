// File: crates/spider-render-skia/tests/svg.rs
// Purpose: SVG export content checks.

use spider_core::Chart;
use spider_render_skia::render_svg_string;

fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.options.title = "Salt & <Pepper>".into();
    for a in ["x", "y", "z"] {
        chart.add_axis(a).unwrap();
    }
    chart.add_series("alpha", [("x", 1.0), ("y", 2.0), ("z", 3.0)]).unwrap();
    chart
}

#[test]
fn document_is_sized_in_millimeters() {
    let svg = render_svg_string(&chart()).unwrap();
    let header = r#"<svg xmlns="http://www.w3.org/2000/svg" width="200mm" height="200mm""#;
    assert!(svg.starts_with(header), "{svg}");
    assert!(svg.lines().next().unwrap().ends_with(r#"viewBox="0 0 200 200">"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn text_is_escaped_and_present() {
    let svg = render_svg_string(&chart()).unwrap();
    assert!(svg.contains("Salt &amp; &lt;Pepper&gt;"));
    assert!(svg.contains(">alpha</text>"));
    for axis in ["x", "y", "z"] {
        assert!(svg.contains(&format!(">{axis}</text>")), "missing axis label {axis}");
    }
}

#[test]
fn background_is_first_path() {
    let svg = render_svg_string(&chart()).unwrap();
    let first = svg.lines().nth(1).unwrap();
    let page = r##"<path d="M0 200 L200 200 L200 0 L0 0 Z" fill="#ffffff""##;
    assert!(first.starts_with(page), "{first}");
}

#[test]
fn export_is_deterministic() {
    assert_eq!(render_svg_string(&chart()).unwrap(), render_svg_string(&chart()).unwrap());
}
