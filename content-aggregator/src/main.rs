use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use content_aggregator::{
    AggregatorConfig, ContentAggregator, NewsSource, PublicationsSource, ResearchSource,
    RunReport, TeamSource,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "content-aggregator",
    about = "Turn the site's content folders into the JSON the pages load"
)]
struct Cli {
    /// Directory holding the news/, publications/, research/ and team/ folders
    #[arg(long, default_value = "public")]
    content_root: PathBuf,

    /// Directory the generated JSON files are written to
    #[arg(long, default_value = "src/data")]
    data_dir: PathBuf,

    /// Pretend the run happens on this day (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate news-generated.json
    News,
    /// Generate publications-generated.json
    Publications,
    /// Generate research-generated.json
    Research,
    /// Generate team-generated.json
    Team,
    /// Generate every collection
    All,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = AggregatorConfig::default()
        .with_content_root(&cli.content_root)
        .with_data_dir(&cli.data_dir);
    if let Some(date) = cli.date {
        config = config.with_reference_date(date);
    }

    let aggregator = ContentAggregator::new(config.clone());
    let publications = PublicationsSource::new(config.author_aliases.clone());
    let team = TeamSource::new(config.default_organization.clone());

    let report = match cli.command {
        Command::News => aggregator.run(&NewsSource),
        Command::Publications => aggregator.run(&publications),
        Command::Research => aggregator.run(&ResearchSource),
        Command::Team => aggregator.run(&team),
        Command::All => {
            let mut failures = 0;
            for (collection, result) in aggregator.run_all() {
                match result {
                    Ok(report) => log_report(&report),
                    Err(e) => {
                        error!("Failed to generate {}: {}", collection, e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                anyhow::bail!("{} collection(s) failed", failures);
            }
            return Ok(());
        }
    };

    let report = report.context("content aggregation failed")?;
    log_report(&report);
    Ok(())
}

fn log_report(report: &RunReport) {
    info!(
        "{}: {} written, {} skipped, {} failed",
        report.collection,
        report.written,
        report.skipped.len(),
        report.failed.len()
    );
    for failure in &report.failed {
        warn!("  {}: {}", failure.folder, failure.reason);
    }
}
