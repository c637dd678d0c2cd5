use domain::{BoxedDriver, DomainError, Job2dDriver, Result};
use infrastructure::drivers::{UsageMeter, UsageTrackingDriverDecorator};
use tracing::{debug, info};

enum CurrentDriver {
    Empty,
    Plain(BoxedDriver),
    Tracked(UsageTrackingDriverDecorator<BoxedDriver>),
}

/// Owns the driver jobs are dispatched to.
///
/// The manager is itself a driver: calls are forwarded to the current driver,
/// or fail with `DomainError::NoDriver` when none is selected.
pub struct DriverManager {
    current: CurrentDriver,
}

impl DriverManager {
    pub fn new(driver: BoxedDriver) -> Self {
        Self {
            current: CurrentDriver::Plain(driver),
        }
    }

    /// Manager with no driver selected
    pub fn empty() -> Self {
        Self {
            current: CurrentDriver::Empty,
        }
    }

    /// Replace the current driver. Any usage tracking on the old driver ends with it.
    pub fn set_current_driver(&mut self, driver: BoxedDriver) {
        if let CurrentDriver::Tracked(old) = &self.current {
            info!("Usage tracking on {} ended with driver change", old.label());
        }
        info!("Current driver set to {}", driver.describe());
        self.current = CurrentDriver::Plain(driver);
    }

    pub fn current_driver_mut(&mut self) -> Result<&mut dyn Job2dDriver> {
        match &mut self.current {
            CurrentDriver::Empty => Err(DomainError::NoDriver),
            CurrentDriver::Plain(driver) => Ok(&mut **driver as &mut dyn Job2dDriver),
            CurrentDriver::Tracked(driver) => Ok(driver as &mut dyn Job2dDriver),
        }
    }

    pub fn has_driver(&self) -> bool {
        !matches!(self.current, CurrentDriver::Empty)
    }

    pub fn is_tracked(&self) -> bool {
        matches!(self.current, CurrentDriver::Tracked(_))
    }

    /// Label and meter of the usage tracker on the current driver
    pub fn usage(&self) -> Option<(&str, UsageMeter)> {
        match &self.current {
            CurrentDriver::Tracked(tracked) => Some((tracked.label(), tracked.meter())),
            _ => None,
        }
    }

    /// Wrap the current driver in a usage tracker labelled `label`.
    ///
    /// Returns the tracker's meter, or `None` when there is no driver or it is
    /// already tracked.
    pub fn enable_tracking(&mut self, label: impl Into<String>) -> Option<UsageMeter> {
        match std::mem::replace(&mut self.current, CurrentDriver::Empty) {
            CurrentDriver::Plain(driver) => {
                let tracked = UsageTrackingDriverDecorator::new(driver, label);
                let meter = tracked.meter();
                self.current = CurrentDriver::Tracked(tracked);
                Some(meter)
            }
            other => {
                self.current = other;
                None
            }
        }
    }

    /// Remove the usage tracker and restore the driver it wrapped
    pub fn disable_tracking(&mut self) -> bool {
        match std::mem::replace(&mut self.current, CurrentDriver::Empty) {
            CurrentDriver::Tracked(tracked) => {
                debug!("Usage tracker {} removed", tracked.label());
                self.current = CurrentDriver::Plain(tracked.into_inner());
                true
            }
            other => {
                self.current = other;
                false
            }
        }
    }
}

impl Job2dDriver for DriverManager {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        self.current_driver_mut()?.set_position(x, y)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.current_driver_mut()?.operate_to(x, y)
    }

    fn describe(&self) -> String {
        match &self.current {
            CurrentDriver::Empty => "no driver".to_string(),
            CurrentDriver::Plain(driver) => driver.describe(),
            CurrentDriver::Tracked(driver) => driver.describe(),
        }
    }
}
