mod bounded_driver;
mod line_driver;
mod logger_driver;
mod recording_driver;
mod transformer;
mod usage_tracking;

pub use bounded_driver::{BoundedDriver, Bounds};
pub use line_driver::{Canvas, Line, LineDriver};
pub use logger_driver::LoggerDriver;
pub use recording_driver::{DriverCall, RecordingDriver};
pub use transformer::TransformerDriver;
pub use usage_tracking::{
    Movement, SegmentRecord, UsageMeter, UsageSnapshot, UsageTrackingDriverDecorator,
};

use domain::{BoxedDriver, DomainError, DriverKind};

use crate::config::{DriverConfig, TransformConfig};

/// Factory for creating driver chains
pub struct DriverFactory;

impl DriverFactory {
    /// Create the base driver for `config`, wrapped in a bounds check when the
    /// config declares a work area. Line drivers draw onto `canvas`.
    pub fn create_driver(
        config: &DriverConfig,
        canvas: &Canvas,
    ) -> Result<BoxedDriver, DomainError> {
        let base: BoxedDriver = match config.kind {
            DriverKind::Logger => Box::new(LoggerDriver::new(config.name.clone())),
            DriverKind::Line => Box::new(LineDriver::new(canvas.clone(), config.name.clone())),
        };

        match config.bounds {
            Some(bounds) => {
                bounds.validate()?;
                Ok(Box::new(BoundedDriver::new(base, bounds)))
            }
            None => Ok(base),
        }
    }

    /// Put a `TransformerDriver` in front of `driver` when a transform is configured
    pub fn apply_transform(
        driver: BoxedDriver,
        transform: Option<&TransformConfig>,
    ) -> Result<BoxedDriver, DomainError> {
        match transform {
            Some(t) => {
                tracing::debug!(scale_x = t.scale_x, scale_y = t.scale_y, "Applying transform");
                Ok(Box::new(TransformerDriver::new(driver, t.scale_x, t.scale_y)?))
            }
            None => Ok(driver),
        }
    }
}
