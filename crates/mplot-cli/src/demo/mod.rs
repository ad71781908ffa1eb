//! Demonstration plots: range/grid data handed to plotly.
pub mod input;
pub mod plots;

use anyhow::Result;
use plotly::Plot;

use crate::demo::input::{DemoConfig, DemoKind};
use crate::util::write_plot_html;

/// Build the plot described by `config`.
pub fn build_plot(config: &DemoConfig) -> Result<Plot> {
    let x = config.x_range.generate()?;
    log::debug!(
        "[mplot::demo] {} demo with {} x samples",
        config.kind,
        x.len()
    );

    let plot = match config.kind {
        DemoKind::Simple => plots::simple_plot(&x, &config.title),
        DemoKind::Multiple => plots::multiple_plot(&x, &config.title),
        DemoKind::Subplots => plots::subplots_plot(&x, &config.title),
        DemoKind::Contour => {
            let y = config.y_range.generate()?;
            plots::contour_plot(&x, &y, &config.title)
        }
        DemoKind::Surface => {
            let y = config.y_range.generate()?;
            plots::surface_plot(&x, &y, &config.title)
        }
    };
    Ok(plot)
}

/// Build the plot and write it as a standalone HTML page.
pub fn run_demo(config: &DemoConfig) -> Result<()> {
    let plot = build_plot(config)?;
    write_plot_html(&config.output_file, &plot)?;
    log::info!(
        "[mplot::demo] Wrote {} demo to {}",
        config.kind,
        config.output_file
    );
    Ok(())
}
