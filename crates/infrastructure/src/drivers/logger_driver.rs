use domain::{Job2dDriver, Result};
use tracing::info;

/// Sink that only logs what it is asked to do
#[derive(Debug, Clone)]
pub struct LoggerDriver {
    name: String,
}

impl LoggerDriver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Job2dDriver for LoggerDriver {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        info!(driver = %self.name, "Position set to ({}, {})", x, y);
        Ok(())
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        info!(driver = %self.name, "Drawing to ({}, {})", x, y);
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
