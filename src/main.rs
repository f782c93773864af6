use crate::commands::cue::{InspectCommand, SpansCommand};
use crate::commands::{Cli, Commands};
use crate::report::{SheetReport, SheetSummary, SpanSummary};
use anyhow::Result;
use clap::Parser;
use cuesheet::cue::CueParser;
use cuesheet::cue::models::CueSheet;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{info, warn};
use std::path::PathBuf;

mod commands;
mod report;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => inspect(pb, cmd).await?,
        Commands::Spans(cmd) => spans(pb, cmd).await?,
    }

    Ok(())
}

async fn inspect(pb: MultiProgress, cmd: InspectCommand) -> Result<()> {
    let sheets = load_sheets(&pb, &cmd.input).await?;

    if cmd.json {
        let reports: Vec<SheetReport> = sheets
            .iter()
            .map(|(path, sheet)| SheetReport::new(path, sheet))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (path, sheet) in &sheets {
        print!("{}", SheetSummary { path, sheet });
    }

    Ok(())
}

async fn spans(pb: MultiProgress, cmd: SpansCommand) -> Result<()> {
    let sheets = load_sheets(&pb, &cmd.input).await?;

    for (path, sheet) in &sheets {
        print!("{}", SpanSummary { path, sheet });
    }

    Ok(())
}

async fn load_sheets(pb: &MultiProgress, inputs: &[PathBuf]) -> Result<Vec<(PathBuf, CueSheet)>> {
    let bar = if inputs.len() > 1 {
        let bar = pb.add(ProgressBar::new(inputs.len() as u64));
        bar.set_style(ProgressStyle::with_template(
            "{spinner} [{bar:30}] {pos}/{len} {wide_msg}",
        )?);
        Some(bar)
    } else {
        None
    };

    let mut sheets = Vec::with_capacity(inputs.len());
    for input in inputs {
        let parser = CueParser::new(input);
        if let Some(bar) = &bar {
            bar.set_message(parser.path().display().to_string());
        }

        let sheet = parser.parse().await?;
        if sheet.is_empty() {
            warn!("No FILE or TRACK directives found in {:?}", parser.path());
        }
        sheets.push((input.clone(), sheet));

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
        info!("Read {} CUE sheets", sheets.len());
    }

    Ok(sheets)
}
