// File: crates/spider-core/src/legend.rs
// Summary: Greedy flow layout of legend entries into centered rows inside the legend region.

use kurbo::{Point, Rect};
use tracing::trace;

use crate::options::LegendOptions;
use crate::text::{FontHandle, FontOracle};
use crate::types::LEGEND_WRAP_FRACTION;

/// One legend entry: a line sample, the series label and trailing separation.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub series_index: usize,
    pub label: String,
    pub sample_width: f64,
    pub label_width: f64,
    pub separator_width: f64,
    /// Left edge of the entry, filled in once its row is placed.
    pub x: f64,
}

impl LegendEntry {
    pub fn width(&self) -> f64 {
        self.sample_width + self.label_width + self.separator_width
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub entries: Vec<LegendEntry>,
    pub width: f64,
    /// Vertical middle of the row; samples and labels are centered on it.
    pub mid_y: f64,
}

/// Pack `labels` (in series order) into rows.
///
/// An entry starts a new row when adding it would take the running width past
/// 85% of the legend width and the current row already holds something. Rows
/// stack downward from the top edge and are centered horizontally.
pub fn layout(
    labels: &[&str],
    legend: Rect,
    font: FontHandle,
    oracle: &dyn FontOracle,
    opts: &LegendOptions,
) -> Vec<LegendRow> {
    let limit = LEGEND_WRAP_FRACTION * legend.width();
    let mut rows: Vec<Vec<LegendEntry>> = Vec::new();
    let mut current: Vec<LegendEntry> = Vec::new();
    let mut w = 0.0;

    for (series_index, label) in labels.iter().enumerate() {
        let entry = LegendEntry {
            series_index,
            label: (*label).to_string(),
            sample_width: opts.line_length + opts.padding,
            label_width: oracle.measure_text(font, label),
            separator_width: 2.0 * opts.padding,
            x: 0.0,
        };
        if w + entry.width() > limit && !current.is_empty() {
            trace!(series_index, running = w, limit, "legend row wrap");
            rows.push(std::mem::take(&mut current));
            w = 0.0;
        }
        w += entry.width();
        current.push(entry);
    }
    if !current.is_empty() {
        rows.push(current);
    }

    let line_height = oracle.line_height(font);
    let pitch = line_height + opts.padding;
    let top = legend.y1 - opts.padding / 2.0;
    rows.into_iter()
        .enumerate()
        .map(|(i, mut entries)| {
            let width: f64 = entries.iter().map(LegendEntry::width).sum();
            let mut x = legend.x0 + (legend.width() - width) / 2.0;
            for e in &mut entries {
                e.x = x;
                x += e.width();
            }
            LegendRow {
                entries,
                width,
                mid_y: top - i as f64 * pitch - line_height / 2.0,
            }
        })
        .collect()
}

impl LegendRow {
    pub fn series_indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.series_index).collect()
    }

    /// Start of the line sample for `entry`, on the row's middle.
    pub fn sample_start(&self, entry: &LegendEntry) -> Point {
        Point::new(entry.x, self.mid_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{FaceRequest, HeuristicFontOracle};
    use approx::assert_relative_eq;

    #[test]
    fn single_row_is_centered() {
        let mut oracle = HeuristicFontOracle::new();
        let request = FaceRequest {
            size_pt: 10.0,
            ..Default::default()
        };
        let font = oracle.load_face(&request).unwrap();
        let legend = Rect::new(0.0, 0.0, 200.0, 20.0);
        let rows = layout(&["a", "b"], legend, font, &oracle, &LegendOptions::default());
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_relative_eq!(row.entries[0].x, (200.0 - row.width) / 2.0);
        assert_relative_eq!(row.entries[1].x, row.entries[0].x + row.entries[0].width());
    }

    #[test]
    fn oversized_entry_still_gets_a_row() {
        let mut oracle = HeuristicFontOracle::new();
        let request = FaceRequest {
            size_pt: 10.0,
            ..Default::default()
        };
        let font = oracle.load_face(&request).unwrap();
        let legend = Rect::new(0.0, 0.0, 5.0, 20.0);
        let labels = ["a very long series name", "b"];
        let rows = layout(&labels, legend, font, &oracle, &LegendOptions::default());
        let indices: Vec<_> = rows.iter().map(LegendRow::series_indices).collect();
        assert_eq!(indices, vec![vec![0], vec![1]]);
        assert!(rows[1].mid_y < rows[0].mid_y);
    }

    #[test]
    fn no_series_no_rows() {
        let oracle = HeuristicFontOracle::new();
        let legend = Rect::new(0.0, 0.0, 50.0, 10.0);
        let rows = layout(&[], legend, FontHandle(0), &oracle, &LegendOptions::default());
        assert!(rows.is_empty());
    }
}
