// File: crates/spider-examples/src/bin/from_code.rs
// Summary: Builds a seven-axis, five-series chart in code and writes it as SVG and PNG.

use spider_core::{Chart, LegendPlacement, ScaleType};
use spider_render_skia::{save, RenderOptions};

fn main() {
    let mut chart = Chart::new();
    chart.options.title = "Orders of magnitude".into();
    chart.options.subtitle = "each axis spans a different decade".into();
    chart.options.legend_options.placement = LegendPlacement::Right;
    chart.options.legend_options.max_width = Some(45.0);

    // axis i tops out at 10^i
    let names: Vec<String> = (0..7).map(|i| format!("axis {i}")).collect();
    for (i, name) in names.iter().enumerate() {
        chart.add_axis_with_max(name.as_str(), 10f64.powi(i as i32)).expect("add axis");
    }
    chart.data.axes[6].scale = ScaleType::Log10;

    for s in 0..5 {
        let data = names.iter().enumerate().map(|(i, name)| {
            let frac = ((s * 3 + i * 5) % 10) as f64 / 10.0 + 0.05;
            (name.clone(), frac * 10f64.powi(i as i32))
        });
        chart.add_series(format!("series {}", s + 1), data).expect("add series");
    }

    let opts = RenderOptions::default();
    for out in ["target/out/example_from_code.svg", "target/out/example_from_code.png"] {
        save(&chart, out, &opts).expect("render chart");
        println!("Wrote {out}");
    }
}
