// File: crates/spider-core/src/config.rs
// Summary: Loading chart definitions from JSON or YAML text and files.

use std::path::Path;

use tracing::debug;

use crate::chart::Chart;
use crate::error::{ConfigError, SpiderResult};
use crate::validate::validate_structure;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Unknown,
}

fn format_of(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("json") => Format::Json,
        Some("yaml" | "yml") => Format::Yaml,
        _ => Format::Unknown,
    }
}

impl Chart {
    /// Parse a JSON chart definition and check its structure. Missing fields take their defaults.
    pub fn from_json(text: &str) -> SpiderResult<Chart> {
        let chart: Chart = serde_json::from_str(text).map_err(ConfigError::from)?;
        validate_structure(&chart)?;
        Ok(chart)
    }

    /// Parse a YAML chart definition and check its structure.
    pub fn from_yaml(text: &str) -> SpiderResult<Chart> {
        let chart: Chart = serde_yaml_ng::from_str(text).map_err(ConfigError::from)?;
        validate_structure(&chart)?;
        Ok(chart)
    }

    /// Load a definition from disk. `.json`, `.yaml` and `.yml` pick the parser;
    /// any other extension tries JSON first, then YAML.
    pub fn from_file(path: impl AsRef<Path>) -> SpiderResult<Chart> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let format = format_of(path);
        debug!(path = %path.display(), ?format, "loading chart definition");
        match format {
            Format::Json => Self::from_json(&text),
            Format::Yaml => Self::from_yaml(&text),
            Format::Unknown => Self::from_json(&text).or_else(|_| Self::from_yaml(&text)),
        }
    }

    pub fn to_json_pretty(&self) -> SpiderResult<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ConfigError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection() {
        assert_eq!(format_of(Path::new("a/b.JSON")), Format::Json);
        assert_eq!(format_of(Path::new("b.yml")), Format::Yaml);
        assert_eq!(format_of(Path::new("b.yaml")), Format::Yaml);
        assert_eq!(format_of(Path::new("chart")), Format::Unknown);
    }

    #[test]
    fn json_round_trips() {
        let mut c = Chart::new();
        for a in ["x", "y", "z"] {
            c.add_axis(a).unwrap();
        }
        c.add_series("s", [("x", 1.0), ("y", 2.0), ("z", 3.0)]).unwrap();
        let back = Chart::from_json(&c.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
