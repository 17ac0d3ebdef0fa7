use crate::{
    api::{submit_all, SubmissionSummary, Teamwork},
    libs::{
        aggregator::{Aggregated, Aggregator, DateRange},
        config::{Config, API_KEY_ENV},
        error::TwLogError,
        messages::Message,
        row::parse_date,
        source::{CsvSource, RowSource},
        submission::{build_submissions, SubmissionRecord},
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(short, long, help = "The full path and filename to the CSV export")]
    pub file: PathBuf,
    #[arg(short, long, help = "Simulate logging time")]
    pub simulate: bool,
    #[arg(short, long, help = "Bypass log confirmation")]
    pub yes: bool,
    #[arg(long, value_parser = parse_day, help = "Do not log items before this date")]
    pub start_date: Option<NaiveDate>,
    #[arg(long, value_parser = parse_day, help = "Do not log items after this date")]
    pub end_date: Option<NaiveDate>,
}

pub async fn cmd(args: LogArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;

    if args.simulate {
        msg_info!(Message::SimulatedMode, true);
    }

    let range = DateRange::new(args.start_date, args.end_date);
    let records = aggregate_file(&config, &args.file, range)?;
    if records.is_empty() {
        msg_print!(Message::NoEntriesToLog);
        return Ok(());
    }

    if !args.simulate && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmLogging(records.len()).to_string())
            .default(false)
            .interact()
            .map_err(|e| msg_error_anyhow!(Message::PromptFailed(e.to_string())))?;
        if !confirmed {
            msg_print!(Message::LoggingCancelled);
            return Ok(());
        }
    }

    msg_print!(Message::LoggingStarted);
    let summary = submit_all(&Teamwork::new(&config), &records, args.simulate).await;
    report(&summary);

    Ok(())
}

/// Loads the configuration, honoring the API key override from the environment.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::read(&path).map_err(TwLogError::from)?.with_api_key(std::env::var(API_KEY_ENV).ok());
    msg_debug!(Message::ConfigLoaded(path.display().to_string()));
    Ok(config)
}

/// Reads and aggregates every row of `file`, then builds the outbound records.
///
/// Any invalid row aborts before a single record is built.
pub fn aggregate_file(config: &Config, file: &Path, range: DateRange) -> Result<Vec<SubmissionRecord>, TwLogError> {
    msg_print!(Message::ParsingFile(file.display().to_string()));

    let mut source = CsvSource::from_path(file)?;
    let mut aggregator = Aggregator::new(config).with_range(range);
    let (mut rows, mut skipped) = (0, 0);

    for row in source.rows() {
        if aggregator.aggregate(&row?)? == Aggregated::Skipped {
            skipped += 1;
        }
        rows += 1;
    }

    msg_print!(Message::ParsingCompleted {
        rows,
        entries: aggregator.len(),
        skipped,
    });
    Ok(build_submissions(aggregator.into_entries()))
}

fn report(summary: &SubmissionSummary) {
    View::submissions(summary);

    let totals = Message::SubmissionSummary {
        created: summary.created(),
        updated: summary.updated(),
        simulated: summary.simulated(),
        failed: summary.failed(),
    };
    if summary.failed() > 0 {
        msg_warning!(totals);
    } else {
        msg_success!(Message::LoggingCompleted);
        msg_print!(totals);
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}
