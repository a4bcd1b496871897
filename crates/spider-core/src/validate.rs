// File: crates/spider-core/src/validate.rs
// Summary: Eager, ordered validation of a chart definition; loads the five role fonts first.

use std::collections::HashSet;

use tracing::debug;

use crate::chart::Chart;
use crate::error::{SpiderError, SpiderResult, ValidationError};
use crate::text::{FontOracle, FontRole, FontSet};
use crate::types::{MAX_AXES, MAX_SERIES, MIN_AXES};

/// Load every role font, then run the structural checks. The first failure wins.
pub fn validate(chart: &Chart, oracle: &mut dyn FontOracle) -> SpiderResult<FontSet> {
    let fonts =
        load_fonts(chart, oracle).inspect_err(|e| debug!(error = %e, "font loading failed"))?;
    validate_structure(chart).inspect_err(|e| debug!(error = %e, "chart validation failed"))?;
    Ok(fonts)
}

pub fn load_fonts(chart: &Chart, oracle: &mut dyn FontOracle) -> SpiderResult<FontSet> {
    let mut load = |role: FontRole| {
        oracle
            .load_face(&chart.options.face_request(role))
            .map_err(|source| SpiderError::FontLoad { role, source })
    };
    Ok(FontSet {
        title: load(FontRole::Title)?,
        subtitle: load(FontRole::Subtitle)?,
        axis_label: load(FontRole::AxisLabel)?,
        tick_label: load(FontRole::TickLabel)?,
        legend_label: load(FontRole::LegendLabel)?,
    })
}

/// Every check that does not need fonts, in reporting order.
pub fn validate_structure(chart: &Chart) -> Result<(), ValidationError> {
    let axes = &chart.data.axes;
    let series = &chart.data.series;
    let opts = &chart.options;

    if axes.len() < MIN_AXES {
        let msg = format!("at least {MIN_AXES} axes are required, got {}", axes.len());
        return Err(ValidationError::new("axes", msg));
    }
    if axes.len() > MAX_AXES {
        let msg = format!("maximum {MAX_AXES} axes allowed, got {}", axes.len());
        return Err(ValidationError::new("axes", msg));
    }
    if series.len() > MAX_SERIES {
        let msg = format!("maximum {MAX_SERIES} series allowed, got {}", series.len());
        return Err(ValidationError::new("series", msg));
    }

    let mut axis_names = HashSet::with_capacity(axes.len());
    for (i, axis) in axes.iter().enumerate() {
        if axis.name.is_empty() {
            return Err(ValidationError::new("axes", format!("axis at index {i} has no name")));
        }
        if !axis_names.insert(axis.name.as_str()) {
            return Err(ValidationError::new("axes", format!("duplicate axis name: {}", axis.name)));
        }
        if let Some(max) = axis.max {
            if !(max.is_finite() && max > 0.0) {
                let msg = format!("axis {} has non-positive max {max}", axis.name);
                return Err(ValidationError::new("axes.max", msg));
            }
        }
    }

    let mut series_names = HashSet::with_capacity(series.len());
    for (i, s) in series.iter().enumerate() {
        if s.name.is_empty() {
            return Err(ValidationError::new("series", format!("series at index {i} has no name")));
        }
        if !series_names.insert(s.name.as_str()) {
            let msg = format!("duplicate series name: {}", s.name);
            return Err(ValidationError::new("series", msg));
        }
        if let Some(axis) = axes.iter().find(|a| !s.data.contains_key(&a.name)) {
            let msg = format!("series {}: missing data for axis {}", s.name, axis.name);
            return Err(ValidationError::new("series.data", msg));
        }
        if let Some(key) = s.data.keys().find(|k| !axis_names.contains(k.as_str())) {
            let msg = format!("series {}: extra data key {key}", s.name);
            return Err(ValidationError::new("series.data", msg));
        }
        if let Some((key, v)) = s.data.iter().find(|(_, v)| !v.is_finite()) {
            let msg = format!("series {}: value {v} for axis {key} is not finite", s.name);
            return Err(ValidationError::new("series.data", msg));
        }
    }

    if !(opts.width.is_finite() && opts.width > 0.0) {
        return Err(ValidationError::new("options.width", "width must be positive"));
    }
    if !(opts.height.is_finite() && opts.height > 0.0) {
        return Err(ValidationError::new("options.height", "height must be positive"));
    }
    let scale = opts.plot_options.scale;
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(ValidationError::new(
            "options.plot_options.scale",
            format!("scale must be in (0, 1], got {scale}"),
        ));
    }
    let radius = chart.radius();
    if !(radius > 0.0) {
        return Err(ValidationError::new(
            "options.plot_options.padding",
            format!("plot radius must be positive, got {radius:.3}mm"),
        ));
    }

    let legend = &opts.legend_options;
    if legend.max_width.is_some_and(|max| legend.min_width > max) {
        return Err(ValidationError::new(
            "options.legend_options.min_width",
            "min_width must not exceed max_width",
        ));
    }
    if legend.max_height.is_some_and(|max| legend.min_height > max) {
        return Err(ValidationError::new(
            "options.legend_options.min_height",
            "min_height must not exceed max_height",
        ));
    }
    Ok(())
}
