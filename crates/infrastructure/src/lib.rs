//! Infrastructure layer - Concrete drivers, decorators and configuration

pub mod config;
pub mod drivers;

pub use config::AppConfig;
pub use drivers::{
    Canvas, DriverFactory, LineDriver, LoggerDriver, RecordingDriver, TransformerDriver,
    UsageMeter, UsageTrackingDriverDecorator,
};
