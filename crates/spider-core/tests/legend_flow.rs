// File: crates/spider-core/tests/legend_flow.rs
// Purpose: Greedy legend row packing and its placement inside the legend region.

use kurbo::Rect;
use proptest::prelude::*;
use spider_core::legend::layout;
use spider_core::{FaceRequest, FontOracle, HeuristicFontOracle, LegendOptions, LegendRow};

fn oracle_and_font() -> (HeuristicFontOracle, spider_core::FontHandle) {
    let mut oracle = HeuristicFontOracle::new();
    let request = FaceRequest {
        size_pt: 10.0,
        ..Default::default()
    };
    let font = oracle.load_face(&request).unwrap();
    (oracle, font)
}

fn indices(rows: &[LegendRow]) -> Vec<Vec<usize>> {
    rows.iter().map(LegendRow::series_indices).collect()
}

#[test]
fn wrap_inside_third_entry() {
    let (oracle, font) = oracle_and_font();
    // 12-char labels take ~38.4mm each, the short ones under 20mm; limit is 85mm
    let labels = ["first series", "second serie", "ccc", "dd", "e"];
    let legend = Rect::new(0.0, 0.0, 100.0, 30.0);
    let rows = layout(&labels, legend, font, &oracle, &LegendOptions::default());
    assert_eq!(indices(&rows), vec![vec![0, 1], vec![2, 3, 4]]);
    assert!(rows[0].width <= 85.0);
    assert!(rows[0].mid_y > rows[1].mid_y, "rows stack downward");
}

#[test]
fn entry_widths_use_padding_and_line_length() {
    let (oracle, font) = oracle_and_font();
    let opts = LegendOptions {
        line_length: 10.0,
        padding: 1.5,
        ..LegendOptions::default()
    };
    let rows = layout(&["abc"], Rect::new(0.0, 0.0, 200.0, 10.0), font, &oracle, &opts);
    let e = &rows[0].entries[0];
    assert_eq!(e.sample_width, 11.5);
    assert_eq!(e.separator_width, 3.0);
    assert_eq!(e.label_width, oracle.measure_text(font, "abc"));
}

#[test]
fn chart_legend_rows_follow_series_order() {
    let mut chart = spider_core::Chart::new();
    for a in ["x", "y", "z"] {
        chart.add_axis(a).unwrap();
    }
    for s in ["alpha", "beta", "gamma"] {
        chart.add_series(s, [("x", 1.0), ("y", 2.0), ("z", 3.0)]).unwrap();
    }
    let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
    let labels: Vec<&str> = layout
        .legend_rows
        .iter()
        .flat_map(|r| r.entries.iter().map(|e| e.label.as_str()))
        .collect();
    assert_eq!(labels, vec!["alpha", "beta", "gamma"]);
    let legend = layout.regions.legend.unwrap();
    for row in &layout.legend_rows {
        assert!(row.mid_y < legend.y1 && row.mid_y > legend.y0);
    }
}

proptest! {
    #[test]
    fn rows_preserve_order_and_respect_limit(
        lens in prop::collection::vec(1usize..30, 0..20),
        width in 20.0f64..300.0,
    ) {
        let (oracle, font) = oracle_and_font();
        let names: Vec<String> = lens.iter().map(|n| "x".repeat(*n)).collect();
        let labels: Vec<&str> = names.iter().map(String::as_str).collect();
        let legend = Rect::new(0.0, 0.0, width, 50.0);
        let rows = layout(&labels, legend, font, &oracle, &LegendOptions::default());

        let flat: Vec<usize> = rows.iter().flat_map(|r| r.series_indices()).collect();
        prop_assert_eq!(flat, (0..labels.len()).collect::<Vec<_>>());
        for row in &rows {
            prop_assert!(!row.entries.is_empty());
            if row.entries.len() > 1 {
                prop_assert!(row.width <= 0.85 * width + 1e-9);
            }
        }
    }
}
