use anyhow::Context;
use clap::Parser;
use railshub::core::config::{self, CliOverrides};
use railshub::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "railshub", about = "Search-grounded answers about Ruby on Rails 8")]
struct Args {
    /// Gemini model to query
    #[arg(short, long)]
    model: Option<String>,

    /// Question to ask on startup
    #[arg(short, long)]
    query: Option<String>,

    /// Start on the empty screen instead of searching right away
    #[arg(long)]
    no_initial_search: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to railshub.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("railshub.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().context("failed to load ~/.railshub/config.toml")?;
    let cli = CliOverrides {
        model: args.model.as_deref(),
        query: args.query.as_deref(),
    };
    // Missing credentials abort here, before the terminal is taken over.
    let resolved = config::resolve(&file_config, &cli)?;

    log::info!(
        "Rails Hub starting up with model: {} (initial search: {})",
        resolved.model_name,
        !args.no_initial_search
    );

    tui::run(resolved, !args.no_initial_search)?;
    Ok(())
}
