pub mod session;

pub use session::{MonitoringSession, UsageReport};
