// File: crates/spider-core/src/axis.rs
// Summary: Axis model, autoscaling and per-axis radial geometry (angle, ticks).

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grid::{format_tick_value, linspace};
use crate::options::AxisOptions;
use crate::scale::ScaleType;
use crate::series::Series;
use crate::types::AUTOSCALE_PADDING_FACTOR;

/// One spoke of the chart. An unset `max` autoscales from the series data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub scale: ScaleType,
}

impl Axis {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max: None,
            scale: ScaleType::Linear,
        }
    }

    pub fn with_max(name: impl Into<String>, max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::new(name)
        }
    }

    /// Effective maximum: the explicit one, or the padded running maximum of
    /// every series' value on this axis (1.0 when nothing is positive).
    pub fn resolved_max(&self, series: &[Series]) -> f64 {
        if let Some(max) = self.max {
            return max;
        }
        let observed = series
            .iter()
            .filter_map(|s| s.data.get(&self.name).copied())
            .fold(0.0_f64, f64::max);
        let max = if observed > 0.0 {
            observed * AUTOSCALE_PADDING_FACTOR
        } else {
            1.0
        };
        trace!(axis = %self.name, observed, max, "autoscaled axis");
        max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Distance from the center in millimeters.
    pub radius: f64,
    /// Data value at that distance.
    pub value: f64,
    pub major: bool,
}

impl Tick {
    pub fn label(&self) -> String {
        format_tick_value(self.value)
    }
}

/// Resolved geometry of one axis for a single render.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    pub name: String,
    /// Direction in degrees, counter-clockwise from +x on a y-up page.
    pub angle_deg: f64,
    pub max: f64,
    pub scale: ScaleType,
    /// Major ticks first, in radial order, then minor ticks in radial order.
    pub ticks: Vec<Tick>,
}

impl AxisGeometry {
    pub fn major_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.major)
    }

    pub fn minor_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| !t.major)
    }

    /// Axis labels on the lower half of the page read bottom-to-top, the rest top-to-bottom.
    pub fn label_rotation(&self) -> f64 {
        if self.angle_deg > 180.0 && self.angle_deg < 360.0 {
            90.0
        } else {
            -90.0
        }
    }
}

/// Angle of axis `index` among `count`: the first points straight up.
#[inline]
pub fn axis_angle(index: usize, count: usize) -> f64 {
    90.0 + index as f64 * 360.0 / count as f64
}

/// Major ticks at the interior points of `linspace(0, radius, n_major + 2)`;
/// minor ticks at the interior points of each adjacent pair of those.
pub fn compute_ticks(radius: f64, max: f64, scale: ScaleType, opts: &AxisOptions) -> Vec<Tick> {
    let stops = linspace(0.0, radius, opts.major_ticks + 2);
    let value_at = |r: f64| {
        if radius > 0.0 {
            scale.value_at(r / radius, max)
        } else {
            0.0
        }
    };
    let mut ticks: Vec<Tick> = stops[1..stops.len() - 1]
        .iter()
        .map(|&r| Tick {
            radius: r,
            value: value_at(r),
            major: true,
        })
        .collect();
    for pair in stops.windows(2) {
        let minors = linspace(pair[0], pair[1], opts.minor_ticks + 2);
        ticks.extend(
            minors[1..minors.len() - 1]
                .iter()
                .map(|&r| Tick {
                    radius: r,
                    value: value_at(r),
                    major: false,
                }),
        );
    }
    ticks
}

pub fn compute_axes(
    axes: &[Axis],
    series: &[Series],
    radius: f64,
    opts: &AxisOptions,
) -> Vec<AxisGeometry> {
    let n = axes.len();
    axes.iter()
        .enumerate()
        .map(|(i, axis)| {
            let max = axis.resolved_max(series);
            AxisGeometry {
                name: axis.name.clone(),
                angle_deg: axis_angle(i, n),
                max,
                scale: axis.scale,
                ticks: compute_ticks(radius, max, axis.scale, opts),
            }
        })
        .collect()
}
