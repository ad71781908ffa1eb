use anyhow::{Context, Result};
use plotly::Plot;
use std::{fs::File, io::Write, path::Path};

use crate::demo::input::RangeConfig;

/// Parse a `START:STOP[:STEP]` range specification. The step defaults to 1.
pub fn parse_range_spec(spec: &str) -> Result<RangeConfig> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        anyhow::bail!("Range must look like START:STOP or START:STOP:STEP: {}", spec);
    }

    let parse = |part: &str| -> Result<f64> {
        part.trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid number '{}' in range {}", part, spec))
    };

    Ok(RangeConfig {
        start: parse(parts[0])?,
        stop: parse(parts[1])?,
        step: if parts.len() == 3 { parse(parts[2])? } else { 1.0 },
    })
}

pub fn validate_html_file(path: &str) -> Result<()> {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => Ok(()),
        _ => anyhow::bail!("Output file must have a .html extension: {}", path),
    }
}

pub fn write_plot_html(path: &str, plot: &Plot) -> Result<()> {
    validate_html_file(path)?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
    file.write_all(plot.to_html().as_bytes())
        .with_context(|| format!("Failed to write plot to: {}", path))?;
    Ok(())
}
