use domain::Job2dDriver;
use serde::Serialize;
use tracing::{info, warn};

use crate::driver::DriverManager;

/// Travel and ink usage of the monitored driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    pub label: String,
    pub travel_distance: f64,
    pub drawing_distance: f64,
}

/// Runtime monitoring of the current driver.
///
/// Enabling wraps the manager's driver in a usage tracker; disabling removes
/// it again. Whether monitoring is on is read from the manager, so replacing
/// the monitored driver ends the session and a later `enable` wraps the new
/// driver. `DriverManager::usage` hands out the meter for readers on other
/// threads.
#[derive(Debug, Default)]
pub struct MonitoringSession {
    label: Option<String>,
}

impl MonitoringSession {
    /// `label` overrides the driver description in usage logs
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }

    pub fn is_enabled(&self, drivers: &DriverManager) -> bool {
        drivers.is_tracked()
    }

    pub fn enable(&mut self, drivers: &mut DriverManager) -> bool {
        if !drivers.has_driver() {
            info!("Monitoring: no driver selected");
            return false;
        }
        if drivers.is_tracked() {
            info!("Monitoring: already enabled on current driver");
            return false;
        }

        let label = self.label.clone().unwrap_or_else(|| drivers.describe());
        match drivers.enable_tracking(label) {
            Some(_) => {
                info!("Monitoring: enabled on current driver");
                true
            }
            None => {
                warn!("Monitoring: current driver cannot be monitored");
                false
            }
        }
    }

    pub fn disable(&mut self, drivers: &mut DriverManager) -> bool {
        if !drivers.disable_tracking() {
            info!("Monitoring: not currently enabled");
            return false;
        }
        info!("Monitoring: disabled");
        true
    }

    /// Log and return the usage summary of the monitored driver
    pub fn report(&self, drivers: &DriverManager) -> Option<UsageReport> {
        let Some((label, meter)) = drivers.usage() else {
            info!("Monitoring: no driver currently monitored");
            return None;
        };

        let snapshot = meter.snapshot();
        info!(
            "[{}] usage summary -> travel={:.2}, ink={:.2}",
            label, snapshot.travel_distance, snapshot.drawing_distance
        );
        Some(UsageReport {
            label: label.to_string(),
            travel_distance: snapshot.travel_distance,
            drawing_distance: snapshot.drawing_distance,
        })
    }

    pub fn reset_counters(&self, drivers: &DriverManager) -> bool {
        let Some((_, meter)) = drivers.usage() else {
            info!("Monitoring: no driver currently monitored");
            return false;
        };
        meter.reset();
        info!("Monitoring: counters reset");
        true
    }
}
