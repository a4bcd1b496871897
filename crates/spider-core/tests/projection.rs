// File: crates/spider-core/tests/projection.rs
// Purpose: Axis angles and polar projection of series values.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use spider_core::{Chart, HeuristicFontOracle, PointShape, ScaleType, SeriesOptions};

fn chart_with_maxima(maxima: &[f64]) -> Chart {
    let mut chart = Chart::new();
    for (i, max) in maxima.iter().enumerate() {
        chart.add_axis_with_max(format!("a{i}"), *max).unwrap();
    }
    chart
}

#[test]
fn values_at_max_sit_on_the_radius() {
    let maxima = [10.0, 250.0, 3.5, 1e6, 42.0];
    let mut chart = chart_with_maxima(&maxima);
    chart
        .add_series("full", maxima.iter().enumerate().map(|(i, m)| (format!("a{i}"), *m)))
        .unwrap();
    let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
    for p in &layout.series[0].points {
        assert_abs_diff_eq!(p.distance(layout.center), layout.radius, epsilon = 1e-9);
    }
}

#[test]
fn first_vertex_points_up() {
    let mut chart = chart_with_maxima(&[10.0, 10.0, 10.0]);
    chart.add_series("s", [("a0", 5.0), ("a1", 5.0), ("a2", 5.0)]).unwrap();
    let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
    let p = layout.series[0].points[0];
    assert_abs_diff_eq!(p.x, layout.center.x, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, layout.center.y + layout.radius / 2.0, epsilon = 1e-9);
}

#[test]
fn values_above_max_project_outside() {
    let mut chart = chart_with_maxima(&[10.0, 10.0, 10.0]);
    chart.add_series("s", [("a0", 20.0), ("a1", 5.0), ("a2", 0.0)]).unwrap();
    let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
    let pts = &layout.series[0].points;
    assert_abs_diff_eq!(pts[0].distance(layout.center), 2.0 * layout.radius, epsilon = 1e-9);
    // zero sits on the center and gets no marker
    assert_eq!(layout.series[0].markers.len(), 2);
}

#[test]
fn markers_follow_shape_and_switch() {
    let mut chart = chart_with_maxima(&[10.0, 10.0, 10.0]);
    chart.add_series("s", [("a0", 1.0), ("a1", 2.0), ("a2", 3.0)]).unwrap();
    chart.data.series[0].options = SeriesOptions {
        point_shape: Some(PointShape::None),
        ..Default::default()
    };
    let mut oracle = HeuristicFontOracle::new();
    assert!(chart.layout(&mut oracle).unwrap().series[0].markers.is_empty());

    chart.data.series[0].options = SeriesOptions::default();
    chart.options.show_point_markers = false;
    assert!(chart.layout(&mut oracle).unwrap().series[0].markers.is_empty());
}

#[test]
fn log_axis_projects_through_log_curve() {
    let mut chart = chart_with_maxima(&[999.0, 10.0, 10.0]);
    chart.data.axes[0].scale = ScaleType::Log10;
    chart.add_series("s", [("a0", 9.0), ("a1", 1.0), ("a2", 1.0)]).unwrap();
    let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
    // log10(10) / log10(1000) = 1/3
    let distance = layout.series[0].points[0].distance(layout.center);
    assert_abs_diff_eq!(distance, layout.radius / 3.0, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn axis_angles_are_evenly_spaced(n in 3usize..=50) {
        let chart = chart_with_maxima(&vec![1.0; n]);
        let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
        prop_assert_eq!(layout.axes.len(), n);
        prop_assert!((layout.axes[0].angle_deg - 90.0).abs() < 1e-12);
        for pair in layout.axes.windows(2) {
            prop_assert!((pair[1].angle_deg - pair[0].angle_deg - 360.0 / n as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn projected_distance_is_proportional(values in prop::collection::vec(0.0f64..100.0, 3..12)) {
        let maxima = vec![100.0; values.len()];
        let mut chart = chart_with_maxima(&maxima);
        let data = values.iter().enumerate().map(|(i, v)| (format!("a{i}"), *v));
        chart.add_series("s", data).unwrap();
        let layout = chart.layout(&mut HeuristicFontOracle::new()).unwrap();
        for (p, v) in layout.series[0].points.iter().zip(&values) {
            prop_assert!((p.distance(layout.center) - layout.radius * v / 100.0).abs() < 1e-9);
        }
    }
}
