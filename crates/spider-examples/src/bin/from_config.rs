// File: crates/spider-examples/src/bin/from_config.rs
// Summary: Loads a YAML chart definition (the bundled one by default) and writes a PNG
// to target/out.

use std::path::PathBuf;

use spider_core::Chart;
use spider_render_skia::{save, RenderOptions};

fn main() {
    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/languages.yaml"));
    println!("Using definition: {}", input.display());

    let chart = Chart::from_file(&input).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out = PathBuf::from(format!("target/out/{stem}.png"));
    save(&chart, &out, &RenderOptions { dpi: 150.0 }).expect("render chart");
    println!("Wrote {}", out.display());
}
