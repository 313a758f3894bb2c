//! Non-interactive report generation.
//!
//! All field values come from command-line flags. Missing flags are passed
//! on as empty fields so the operator sees the same "required field" error
//! the interactive form would produce.

use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
    generator::{RawReportFields, ReportGenerator},
    messages::Message,
    view::View,
};
use crate::{msg_print, msg_success};
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

/// Output options shared by `generate` and `form`.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Report file format
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ExportFormat,

    /// Directory for the report file
    ///
    /// Defaults to the configured output directory, then the current
    /// directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report text to stdout instead of writing a file
    #[arg(long)]
    pub print: bool,
}

/// Command-line arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Report date as it should appear in the report, e.g. 12.05.2025
    #[arg(short, long)]
    date: Option<String>,

    /// Furnace name, e.g. "Furnace 1"
    #[arg(long)]
    furnace: Option<String>,

    /// Program 1 start time (HH:MM)
    #[arg(long)]
    prog1_start: Option<String>,

    /// Program 1 stop time (HH:MM)
    #[arg(long)]
    prog1_end: Option<String>,

    /// Program 2 start time (HH:MM)
    #[arg(long)]
    prog2_start: Option<String>,

    /// Program 2 stop time (HH:MM)
    #[arg(long)]
    prog2_end: Option<String>,

    /// Free-text notifications for the report
    #[arg(short, long, default_value = "")]
    notifications: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl From<&GenerateArgs> for RawReportFields {
    fn from(args: &GenerateArgs) -> Self {
        RawReportFields {
            date: args.date.clone().unwrap_or_default(),
            furnace: args.furnace.clone().unwrap_or_default(),
            prog1_start: args.prog1_start.clone().unwrap_or_default(),
            prog1_end: args.prog1_end.clone().unwrap_or_default(),
            prog2_start: args.prog2_start.clone().unwrap_or_default(),
            prog2_end: args.prog2_end.clone().unwrap_or_default(),
            notifications: args.notifications.clone(),
        }
    }
}

pub fn cmd(args: GenerateArgs) -> Result<()> {
    let config = Config::read()?;
    let generator = ReportGenerator::from_config(&config);

    emit(&config, &generator, &RawReportFields::from(&args), &args.output)
}

/// Generates the report for `raw` and prints or writes it.
///
/// Nothing is written when validation or computation fails.
pub fn emit(config: &Config, generator: &ReportGenerator, raw: &RawReportFields, output: &OutputArgs) -> Result<()> {
    let (input, model) = generator
        .prepare(raw)
        .map_err(|e| anyhow!(Message::ReportGenerationFailed(e.to_string())))?;
    let text = generator.render(&input, &model);

    if output.print {
        println!("{}", text);
        return Ok(());
    }

    let output_dir = output
        .output
        .clone()
        .or_else(|| config.output_dir())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = Exporter::new(output.format, output_dir).export(&input, &model, &text)?;

    msg_print!(Message::ReportMetricsHeader(input.furnace.clone(), input.date.clone()), true);
    View::metrics(&model);
    msg_print!(Message::ReportMetricsLegend);
    msg_success!(Message::ReportSaved(path.display().to_string()), true);

    Ok(())
}
