//! sleepdash CLI
//!
//! Command-line interface over the sleep-survey aggregation engine:
//! - List the dashboard charts
//! - Show one chart or all of them as tables or JSON
//! - Inspect what was loaded from the dataset
//! - Generate a config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sleepdash::charts::ChartKind;
use sleepdash::config::{generate_default_config, Config, OutputFormat};
use sleepdash::dataset::DatasetLoader;
use sleepdash::report::{render_chart, render_info};
use sleepdash::{init_logging, AggregationEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sleepdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aggregated data behind the sleep habits dashboard")]
#[command(long_about = "sleepdash loads a sleep-survey CSV once and computes the data behind ten charts:\nsleep quality, energy, caffeine, activity, mood, workload, naps and dinner time.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV, overriding the configured path
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format, overriding the configured one
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available charts
    Charts,

    /// Show one chart
    Show {
        /// Chart index (1-10) or name, e.g. "caffeine-rem"
        chart: ChartKind,
    },

    /// Show every chart
    All,

    /// Show dataset size, load diagnostics and field coverage
    Info,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(path) = cli.data {
        config.dataset.path = path;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    init_logging(&config.logging);

    let precision = config.output.precision;
    let format = config.output.format;

    match cli.command {
        Commands::Charts => {
            println!("{:<4} {:<18} {:<36} {}", "#", "Name", "Title", "Description");
            println!("{}", "-".repeat(110));
            for kind in ChartKind::all() {
                println!(
                    "{:<4} {:<18} {:<36} {}",
                    kind.index(),
                    kind.slug(),
                    kind.title(),
                    kind.description()
                );
            }
        }

        Commands::Show { chart } => {
            let engine = load_engine(&config).await;
            let data = engine.chart(chart);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Table => print!("{}", render_chart(&data, precision)),
            }
        }

        Commands::All => {
            let engine = load_engine(&config).await;
            let charts = engine.all_charts();

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&charts)?),
                OutputFormat::Table => {
                    let rendered: Vec<String> =
                        charts.iter().map(|c| render_chart(c, precision)).collect();
                    print!("{}", rendered.join("\n"));
                }
            }
        }

        Commands::Info => {
            let outcome = DatasetLoader::new()
                .load(&config.dataset.path)
                .await
                .with_context(|| format!("loading {:?}", config.dataset.path))?;
            let coverage = outcome.dataset.field_coverage();

            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "path": config.dataset.path,
                        "report": outcome.report,
                        "coverage": coverage,
                    }))?
                ),
                OutputFormat::Table => {
                    println!("Dataset: {:?}", config.dataset.path);
                    print!("{}", render_info(&outcome.report, &coverage));
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Load the dataset once; a failed load shows every chart as empty
async fn load_engine(config: &Config) -> AggregationEngine {
    let dataset = DatasetLoader::new()
        .load_or_empty(&config.dataset.path)
        .await;
    AggregationEngine::new(dataset)
}
