use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infrastructure::config::{AppConfig, TransformConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory (optional)
    #[arg(long)]
    config_dir: Option<String>,

    /// Override horizontal scale factor
    #[arg(long)]
    scale_x: Option<f64>,

    /// Override vertical scale factor
    #[arg(long)]
    scale_y: Option<f64>,

    /// Enable usage monitoring regardless of config
    #[arg(long)]
    monitor: bool,

    /// Override monitoring label
    #[arg(long)]
    label: Option<String>,

    /// Print the job outcome as JSON
    #[arg(long)]
    json: bool,
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if args.scale_x.is_some() || args.scale_y.is_some() {
        let current = config.transform.clone().unwrap_or(TransformConfig {
            scale_x: 1.0,
            scale_y: 1.0,
        });
        config.transform = Some(TransformConfig {
            scale_x: args.scale_x.unwrap_or(current.scale_x),
            scale_y: args.scale_y.unwrap_or(current.scale_y),
        });
    }
    if args.monitor {
        config.monitoring.enabled = true;
    }
    if let Some(label) = &args.label {
        config.monitoring.label = Some(label.clone());
    }
}

fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,jobs2d_app=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Run from the workspace root during development
    let dev_base = "crates/jobs2d-app";
    let base_dir = if std::path::Path::new(dev_base).exists() {
        dev_base
    } else {
        "."
    };
    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or_else(|| format!("{}/config", base_dir));

    info!("Loading configuration from {}", config_dir);
    let mut config = AppConfig::load(&config_dir)?;
    apply_overrides(&mut config, &args);

    let outcome = jobs2d_app::run_job(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        info!(
            driver = %outcome.driver,
            lines = outcome.drawn.len(),
            history = outcome.history_len,
            "Finished {}",
            outcome.command
        );
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
