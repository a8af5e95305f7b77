//! CLI entry-point for classifying a health-impact score.

use std::io::Write;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api::types::ImpactDto, cli::OutputFormat, risk::impact};

/// Args for the `impact` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Predicted score; omit to render the unavailable state.
    #[arg(long, allow_negative_numbers = true)]
    pub score: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    let dto = ImpactDto::new(args.score, impact::classify(args.score));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&dto, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn render<W: Write>(dto: &ImpactDto, format: OutputFormat, out: &mut W) -> Result<()> {
    match (format, &dto.level) {
        (OutputFormat::Json, _) => {
            serde_json::to_writer_pretty(&mut *out, dto)?;
            writeln!(out)?;
        }
        (OutputFormat::Csv, Some(level)) => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(level)?;
            writer.flush()?;
        }
        (_, Some(level)) => {
            writeln!(out, "Health Impact: {} ({})", level.label, level.index)?;
            writeln!(out, "{}", level.description)?;
        }
        (_, None) => writeln!(out, "{}", dto.message)?,
    }
    Ok(())
}
