use config::{Config, ConfigError, Environment, File, FileFormat};
use domain::{CommandRef, CompoundCommand, DriverKind, OperateToCommand, SetPositionCommand};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::drivers::Bounds;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DriverConfig {
    #[serde(default)]
    pub kind: DriverKind,
    #[serde(default = "default_driver_name")]
    pub name: String,
    /// Work area; coordinates outside it are rejected
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            kind: DriverKind::default(),
            name: default_driver_name(),
            bounds: None,
        }
    }
}

fn default_driver_name() -> String {
    "plotter".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransformConfig {
    pub scale_x: f64,
    pub scale_y: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Label used in usage logs; defaults to the driver description
    #[serde(default)]
    pub label: Option<String>,
}

/// One step of a configured job
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CommandConfig {
    SetPosition { x: i32, y: i32 },
    OperateTo { x: i32, y: i32 },
}

impl CommandConfig {
    pub fn to_command(&self) -> CommandRef {
        match *self {
            Self::SetPosition { x, y } => Arc::new(SetPositionCommand::new(x, y)),
            Self::OperateTo { x, y } => Arc::new(OperateToCommand::new(x, y)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub transform: Option<TransformConfig>,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub job: Vec<CommandConfig>,
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("driver.kind", DriverKind::default().as_str())?
            .set_default("monitoring.enabled", false)?
            // Local config file, required so a job never starts unconfigured
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(true))
            // Per run mode overrides, e.g. config/development.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. JOBS2D__DRIVER__KIND=Line)
            .add_source(Environment::with_prefix("JOBS2D").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a TOML document without touching the filesystem or environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// The configured job as one compound command, `None` when no steps are configured
    pub fn job_command(&self) -> Option<CompoundCommand> {
        if self.job.is_empty() {
            return None;
        }
        Some(self.job.iter().map(CommandConfig::to_command).collect())
    }
}
