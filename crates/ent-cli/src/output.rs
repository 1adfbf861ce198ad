//! Report rendering: human-readable lines, terse CSV, or JSON.

use std::io::{self, Write};

use ent_core::{ChiSquareBucket, EntReport};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Terse,
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &EntReport,
    format: Format,
) -> Result<(), CliError> {
    match format {
        Format::Human => write_human(out, report).map_err(CliError::Write),
        Format::Terse => write_terse(out, report).map_err(CliError::Write),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out).map_err(CliError::Write)
        }
    }
}

fn write_human<W: Write>(out: &mut W, report: &EntReport) -> io::Result<()> {
    let sample = report.mode.sample_name();

    writeln!(out, "Entropy = {:.6} bits per {sample}.", report.entropy)?;
    writeln!(
        out,
        "Chi square distribution for {} samples is {:.2}, and randomly",
        report.symbols, report.chi_square
    )?;
    match report.chi_square_bucket() {
        ChiSquareBucket::Below => {
            writeln!(out, "would exceed this value less than 0.01 percent of the times.")?
        }
        ChiSquareBucket::Above => {
            writeln!(out, "would exceed this value more than 99.99 percent of the times.")?
        }
        ChiSquareBucket::Within(pct) => {
            writeln!(out, "would exceed this value {pct:.2} percent of the times.")?
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "Arithmetic mean value of data {sample}s is {:.4} ({:.1} = random).",
        report.mean,
        report.mode.uniform_mean()
    )?;

    match (report.monte_carlo_pi, report.pi_error_percent()) {
        (Some(pi), Some(err)) => writeln!(
            out,
            "Monte Carlo value for Pi is {pi:.9} (error {err:.2} percent)."
        )?,
        _ => writeln!(out, "Monte Carlo value for Pi is undefined (fewer than 6 bytes).")?,
    }

    match report.serial_correlation {
        Some(r) => writeln!(
            out,
            "Serial correlation coefficient is {r:.6} (totally uncorrelated = 0.0)."
        )?,
        None => writeln!(out, "Serial correlation coefficient is undefined (all values equal!).")?,
    }
    Ok(())
}

/// Two CSV rows: a header tagged `0` and the values tagged `1`.
/// Undefined statistics are left empty.
fn write_terse<W: Write>(out: &mut W, report: &EntReport) -> io::Result<()> {
    let optional = |v: Option<f64>| v.map(|v| format!("{v:.6}")).unwrap_or_default();
    writeln!(
        out,
        "0,File-{}s,Entropy,Chi-square,Mean,Monte-Carlo-Pi,Serial-Correlation",
        report.mode.sample_name()
    )?;
    writeln!(
        out,
        "1,{},{:.6},{:.6},{:.6},{},{}",
        report.symbols,
        report.entropy,
        report.chi_square,
        report.mean,
        optional(report.monte_carlo_pi),
        optional(report.serial_correlation)
    )
}
