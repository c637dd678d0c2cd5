use std::fmt::Debug;
use std::sync::Arc;

use crate::driver::Job2dDriver;
use crate::error::Result;

/// A replayable instruction against the drawing capability.
///
/// Commands are immutable, so one instance can be shared between the command
/// manager, its history and any number of compound commands.
pub trait DriverCommand: Send + Sync + Debug {
    /// Run the command against `driver`
    fn execute(&self, driver: &mut dyn Job2dDriver) -> Result<()>;

    /// Short human readable form
    fn describe(&self) -> String;
}

/// Shared handle to an immutable command
pub type CommandRef = Arc<dyn DriverCommand>;
