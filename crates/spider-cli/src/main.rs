// File: crates/spider-cli/src/main.rs
// Summary: `spider` binary; loads a JSON/YAML chart definition and writes it as PNG or SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spider_core::Chart;
use spider_render_skia::{save, RenderOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Render a spider chart from a definition file
#[derive(Parser, Debug)]
#[command(name = "spider", author, version, about, long_about = None)]
struct Cli {
    /// Chart definition (.json, .yaml or .yml)
    #[arg(short, long)]
    config: PathBuf,

    /// Output image; the extension (.png or .svg) picks the format
    #[arg(short, long)]
    output: PathBuf,

    /// Raster resolution for PNG output
    #[arg(long, default_value_t = 96.0)]
    dpi: f64,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "arguments parsed");

    let chart = Chart::from_file(&cli.config)
        .with_context(|| format!("failed to load chart definition '{}'", cli.config.display()))?;
    save(&chart, &cli.output, &RenderOptions { dpi: cli.dpi })
        .with_context(|| format!("failed to render '{}'", cli.output.display()))?;

    println!("{}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["spider", "--config", "a.json"]).is_err());
        assert!(Cli::try_parse_from(["spider", "--output", "a.png"]).is_err());
        let cli = Cli::try_parse_from(["spider", "-c", "a.yaml", "-o", "out/a.svg"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("a.yaml"));
        assert_eq!(cli.dpi, 96.0);
    }
}
