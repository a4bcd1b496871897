// File: crates/spider-core/src/scale.rs
// Summary: Linear and logarithmic radial scales mapping data values to a fraction of the radius.

use serde::{Deserialize, Serialize};

use crate::grid::{lerp, linmap};

/// How an axis maps values onto its radius.
///
/// Log scales use `log(1 + v) / log(1 + max)` so zero stays at the center.
/// The base cancels out of that ratio, so `Log2` and `Log10` lay out identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Linear,
    Log2,
    Log10,
}

impl ScaleType {
    fn log(self, v: f64) -> f64 {
        match self {
            ScaleType::Log2 => v.log2(),
            _ => v.log10(),
        }
    }

    fn exp(self, v: f64) -> f64 {
        match self {
            ScaleType::Log2 => v.exp2(),
            _ => 10f64.powf(v),
        }
    }

    /// Fraction of the radius at which `value` sits on an axis whose maximum is `max`.
    ///
    /// Linear is unclamped; log clamps negative values to the center.
    #[inline]
    pub fn fraction(self, value: f64, max: f64) -> f64 {
        match self {
            ScaleType::Linear => linmap(0.0, max, 0.0, 1.0, value),
            _ => {
                let top = self.log(1.0 + max);
                if top <= 0.0 {
                    return 0.0;
                }
                linmap(0.0, top, 0.0, 1.0, self.log(1.0 + value.max(0.0)))
            }
        }
    }

    /// Inverse of [`fraction`](Self::fraction): the data value at fraction `t` of the radius.
    #[inline]
    pub fn value_at(self, t: f64, max: f64) -> f64 {
        match self {
            ScaleType::Linear => lerp(0.0, max, t),
            _ => self.exp(lerp(0.0, self.log(1.0 + max), t)) - 1.0,
        }
    }
}
