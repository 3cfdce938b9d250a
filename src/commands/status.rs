use super::resolve_config;
use crate::metrics::score_status_with;
use anyhow::Result;
use std::path::Path;

/// Print the status label for a percentage.
pub fn handle_status(percentage: f64, chart: bool, config: Option<&Path>) -> Result<()> {
    let thresholds = resolve_config(config)?.thresholds();
    let status = score_status_with(percentage, &thresholds);
    let label = if chart {
        status.chart_label()
    } else {
        status.label()
    };
    println!("{label}");
    Ok(())
}
