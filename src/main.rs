use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod console;
mod error;
mod extract;
mod fetch;
mod filter;
mod logging;
mod naming;
mod pipeline;
mod storage;
mod types;
mod urls;
mod utils;

use config::Config;
use console::Console;
use fetch::HttpClient;
use pipeline::ProductScraper;
use storage::ImageStore;
use types::{DownloadReport, FailurePolicy, OverwritePolicy};

const URL_PROMPT: &str = "Enter the Shopify product URL:";

#[derive(Parser)]
#[command(name = "shop-images")]
#[command(about = "Download the product images from a Shopify product page")]
struct Cli {
    /// Product page URL (prompted on stdin when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,
    /// Directory that receives one folder per product [default: "Scraped Images"]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Keep files that already exist instead of overwriting them
    #[arg(long)]
    skip_existing: bool,
    /// Continue with the next image when one fails
    #[arg(short, long)]
    keep_going: bool,
    /// Also drop known decorative (banner, logo, social) images
    #[arg(long)]
    exclude_decorative: bool,
    /// Quiet mode - suppress per-image progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Command-line flags win over the config file
    fn apply_to(&self, cfg: &mut Config) {
        if let Some(dir) = &self.output_dir {
            cfg.output_root = dir.clone();
        }
        if self.skip_existing {
            cfg.overwrite = OverwritePolicy::Skip;
        }
        if self.keep_going {
            cfg.on_failure = FailurePolicy::Continue;
        }
        if self.exclude_decorative {
            cfg.exclude_decorative = true;
        }
    }
}

fn run<R: BufRead, W: Write>(
    cli: &Cli,
    cfg: &Config,
    console: &mut Console<R, W>,
) -> Result<DownloadReport> {
    let url = match &cli.url {
        Some(url) => url.trim().to_string(),
        None => console.ask(URL_PROMPT).context("Failed to read URL from stdin")?,
    };

    let client = HttpClient::new(&cfg.user_agent)?;
    let store = ImageStore::new(&cfg.output_root, cfg.overwrite);
    let mut scraper = ProductScraper::new(&client, store).on_failure(cfg.on_failure);
    if cfg.exclude_decorative {
        scraper = scraper.exclude_decorative(cfg.deny_list.clone());
    }

    let report = scraper.run(&url, console)?;

    let folder = scraper
        .store()
        .folder_path(&naming::ProductNames::from_url(&url).folder);
    console.progress(&format!("Saved to {}", utils::display_folder(&folder)));
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    let mut console = Console::stdio(cli.quiet);

    let mut cfg = match Config::load_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            console.say(&format!("Error: {:#}", e));
            return ExitCode::FAILURE;
        }
    };
    cli.apply_to(&mut cfg);

    match run(&cli, &cfg, &mut console) {
        Ok(report) if report.is_complete() => {
            console.say(&report.summary());
            console.say("Images downloaded successfully.");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            console.say(&report.summary());
            for failed in &report.failed {
                console.say(&format!("  {}: {}", failed.url, failed.error));
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            console.say(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}
