//! Mail Guard - a terminal email threat detector
//!
//! Binary entry point: parses the CLI, loads settings, and starts either the
//! TUI or the headless NDJSON runner.

mod headless;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use mailguard_app::config::{load_settings, resolve_metrics_path, Settings};
use mailguard_app::state::MetricsPanel;
use mailguard_client::HttpClassifier;
use mailguard_core::{logging, EmailText};

/// Mail Guard - check emails for spam from the terminal
#[derive(Parser, Debug)]
#[command(name = "mailguard", version)]
#[command(about = "A terminal email threat detector backed by a remote spam classifier", long_about = None)]
struct Args {
    /// Classification endpoint (overrides service.endpoint)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Metrics payload file (overrides metrics.file; relative to the working directory)
    #[arg(long, value_name = "PATH")]
    metrics: Option<PathBuf>,

    /// Directory containing .mailguard/config.toml (default: current directory)
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Classify one email and print NDJSON events instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Email text for headless mode (read from stdin when omitted)
    #[arg(long, value_name = "TEXT", requires = "headless")]
    text: Option<String>,
}

impl Args {
    /// Apply CLI overrides on top of file settings.
    ///
    /// A relative `--metrics` path is anchored at `cwd`, not `--config-dir`.
    fn apply_overrides(&self, settings: &mut Settings, cwd: &Path) {
        if let Some(endpoint) = &self.endpoint {
            settings.service.endpoint = endpoint.clone();
        }
        if let Some(metrics) = &self.metrics {
            settings.metrics.file = cwd.join(metrics);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = args.config_dir.clone().unwrap_or_else(|| cwd.clone());

    let mut settings = load_settings(&base_dir);
    args.apply_overrides(&mut settings, &cwd);

    let endpoint = settings
        .service
        .endpoint_url()
        .wrap_err("Invalid classification endpoint")?;
    let classifier = HttpClassifier::new(endpoint).with_timeout(settings.service.timeout());
    let metrics_path = resolve_metrics_path(&settings, &base_dir);
    info!(
        "Endpoint: {}, metrics: {}",
        classifier.endpoint(),
        metrics_path.display()
    );

    if args.headless {
        let text = match args.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .wrap_err("Failed to read email text from stdin")?;
                buf
            }
        };

        let ok = headless::run_headless(&classifier, &metrics_path, EmailText::new(text)).await;
        if !ok {
            warn!("Headless check failed");
            std::process::exit(1);
        }
        return Ok(());
    }

    let metrics = MetricsPanel::load(&metrics_path);
    mailguard_tui::run(settings, metrics, classifier).await?;
    Ok(())
}
