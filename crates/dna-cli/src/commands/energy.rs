use crate::cli::EnergyArgs;
use crate::config::models::OutputConfig;
use crate::config::{ConfigOverrides, OutputFormat, build_config};
use crate::error::{CliError, Result};
use crate::utils::input::{collect_sources, read_source};
use dna_energy::{EnergyReport, measure_all, total_energy};
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Serialize)]
struct EnergySummary<'a> {
    reports: &'a [EnergyReport],
    total: usize,
}

pub fn run(args: EnergyArgs) -> Result<()> {
    let config = build_config(&args.source, &ConfigOverrides::from(&args))?;
    let sources = collect_sources(&args)?;

    let mut stdin = std::io::stdin().lock();
    let inputs = sources
        .iter()
        .map(|source| read_source(source, &mut stdin, config.input.strip_trailing_newline))
        .collect::<Result<Vec<_>>>()?;

    let reports = measure_all(inputs);
    info!(
        "Measured {} input(s), total energy {}.",
        reports.len(),
        total_energy(&reports)
    );

    let rendered = render(&reports, &config.output)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub fn render(reports: &[EnergyReport], output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|report| {
                if output.show_source {
                    format!("{}\t{}\n", escape_label(&report.source), report.energy)
                } else {
                    format!("{}\n", report.energy)
                }
            })
            .collect()),
        OutputFormat::Json => {
            let summary = EnergySummary {
                reports,
                total: total_energy(reports),
            };
            let mut json = serde_json::to_string(&summary)
                .map_err(|e| CliError::Serialization(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Escapes control characters so a label cannot break the one-line-per-report layout.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
