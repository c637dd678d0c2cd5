//! Application layer - Use cases around commands and drivers

pub mod command;
pub mod driver;
pub mod monitoring;
pub mod preview;

pub use command::{CommandHistory, CommandManager, CommandObserver};
pub use driver::DriverManager;
pub use monitoring::{MonitoringSession, UsageReport};
pub use preview::CommandPreview;
