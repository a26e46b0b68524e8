// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use cx_parser::Schedule;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a schedule as one labeled line per field:
///
/// ```text
/// minute        0 15 30 45
/// hour          0
/// ```
pub fn render_text(schedule: &Schedule) -> String {
    schedule
        .rows()
        .map(|(label, values)| {
            format!("{:<width$}{}\n", label, values.join(" "), width = LABEL_WIDTH)
        })
        .collect()
}

pub fn render(schedule: &Schedule, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(schedule)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(schedule)?)),
    }
}
