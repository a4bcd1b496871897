// File: crates/spider-core/src/grid.rs
// Summary: Tick layout helpers: linspace, linear mapping and tick label formatting.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Map `v` linearly from `[a, b]` onto `[c, d]`. Not clamped.
#[inline]
pub fn linmap(a: f64, b: f64, c: f64, d: f64, v: f64) -> f64 {
    lerp(c, d, (v - a) / (b - a))
}

/// Format a tick value by magnitude.
///
/// Below 1000 the value keeps 3/2/1/0 decimals; above that it is scaled and
/// suffixed (k, M, G, T, P) with no decimals. Rounding is half away from zero.
pub fn format_tick_value(val: f64) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e3, "k"), (1e6, "M"), (1e9, "G"), (1e12, "T")];
    if val < 1.0 {
        return fixed(val, 3);
    }
    if val < 10.0 {
        return fixed(val, 2);
    }
    if val < 100.0 {
        return fixed(val, 1);
    }
    if val < 1000.0 {
        return fixed(val, 0);
    }
    let (div, suffix) = SUFFIXES
        .iter()
        .copied()
        .find(|(div, _)| val < div * 1000.0)
        .unwrap_or((1e15, "P"));
    format!("{}{}", fixed(val / div, 0), suffix)
}

fn fixed(v: f64, decimals: usize) -> String {
    let p = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (v * p).round() / p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_is_inclusive() {
        assert_eq!(linspace(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
    }

    #[test]
    fn linmap_extrapolates() {
        assert_eq!(linmap(0.0, 10.0, 0.0, 100.0, 5.0), 50.0);
        assert_eq!(linmap(0.0, 10.0, 0.0, 100.0, 20.0), 200.0);
    }

    #[test]
    fn tick_labels_by_magnitude() {
        assert_eq!(format_tick_value(0.5), "0.500");
        assert_eq!(format_tick_value(4.25), "4.25");
        assert_eq!(format_tick_value(42.0), "42.0");
        assert_eq!(format_tick_value(500.0), "500");
        assert_eq!(format_tick_value(2500.0), "3k");
        assert_eq!(format_tick_value(1_500_000.0), "2M");
        assert_eq!(format_tick_value(7.2e9), "7G");
        assert_eq!(format_tick_value(3.0e12), "3T");
        assert_eq!(format_tick_value(4.0e18), "4000P");
    }
}
