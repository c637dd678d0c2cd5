//! Runs one drawing job through the configured driver chain

use std::sync::Arc;

use anyhow::{Context, Result};
use application::{CommandManager, CommandPreview, DriverManager, MonitoringSession, UsageReport};
use domain::{CompoundCommand, Job2dDriver};
use infrastructure::AppConfig;
use infrastructure::DriverFactory;
use infrastructure::drivers::{Canvas, Line};
use serde::Serialize;
use tracing::info;

/// What a finished job produced
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    pub driver: String,
    pub command: String,
    /// Lines of the preview, in job coordinates
    pub preview: Vec<Line>,
    /// Lines that reached a line driver, in device coordinates
    pub drawn: Vec<Line>,
    pub usage: Option<UsageReport>,
    pub history_len: usize,
}

/// Small house outline drawn when the config has no job
pub fn demo_job() -> CompoundCommand {
    CompoundCommand::builder()
        .add_set_position(-100, 0)
        .add_operate_to(100, 0)
        .add_operate_to(100, -150)
        .add_operate_to(0, -250)
        .add_operate_to(-100, -150)
        .add_operate_to(-100, 0)
        .add_set_position(-30, 0)
        .add_operate_to(-30, -80)
        .add_operate_to(30, -80)
        .add_operate_to(30, 0)
        .build()
}

pub fn run_job(config: &AppConfig) -> Result<JobOutcome> {
    let canvas = Canvas::new();
    let base = DriverFactory::create_driver(&config.driver, &canvas)
        .context("Failed to create driver")?;
    let chain = DriverFactory::apply_transform(base, config.transform.as_ref())
        .context("Invalid transform")?;
    let mut drivers = DriverManager::new(chain);

    let preview = CommandPreview::new();
    let mut commands = CommandManager::new();
    commands.add_observer(Box::new(preview.clone()));

    let mut monitoring = MonitoringSession::new(config.monitoring.label.clone());
    if config.monitoring.enabled {
        monitoring.enable(&mut drivers);
    }

    let job = config.job_command().unwrap_or_else(|| {
        info!("No job configured, using demo figure");
        demo_job()
    });
    commands.set_current_command(Arc::new(job));

    info!(driver = %drivers.describe(), "Running {}", commands.current_command_description());
    commands
        .run_current_command(&mut drivers)
        .context("Job aborted by driver")?;

    Ok(JobOutcome {
        driver: drivers.describe(),
        command: commands.current_command_description(),
        preview: preview.lines(),
        drawn: canvas.lines(),
        usage: monitoring.report(&drivers),
        history_len: commands.history().len(),
    })
}
