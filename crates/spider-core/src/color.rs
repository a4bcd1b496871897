// File: crates/spider-core/src/color.rs
// Summary: Resolved RGBA color type plus parsing of hex and CSS named colors.
// Notes:
// - Names and hex digits are resolved by csscolorparser. Only `#rrggbb`, `#rrggbbaa`
//   and bare names are accepted.
// - Parsing never fails: empty/"transparent"/unknown -> transparent, malformed hex -> opaque black.
// - Colors deserialize from strings so the layout core only ever sees resolved RGBA.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a color string. See the module notes for the fallback rules.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("transparent") {
            return Self::TRANSPARENT;
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).unwrap_or(Self::BLACK);
        }
        named(s).unwrap_or(Self::TRANSPARENT)
    }

    /// Replace the alpha channel with `opacity` clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let o = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        Self {
            a: (o * 255.0) as u8,
            ..self
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `#rrggbb` without alpha.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<String> for Rgba {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Rgba {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

/// Resolve `color` and overwrite its alpha with the clamped `opacity`.
pub fn resolve_with_opacity(color: &str, opacity: f64) -> Rgba {
    Rgba::parse(color).with_opacity(opacity)
}

// ---- helpers ----------------------------------------------------------------

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    css(&format!("#{hex}"))
}

/// Bare CSS color names only; functional forms are not accepted.
fn named(name: &str) -> Option<Rgba> {
    if !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    css(name)
}

fn css(s: &str) -> Option<Rgba> {
    let [r, g, b, a] = csscolorparser::parse(s).ok()?.to_rgba8();
    Some(Rgba::new(r, g, b, a))
}
