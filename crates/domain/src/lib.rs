//! Domain layer - Pure drawing model with no external dependencies
//!
//! This crate contains:
//! - The `Job2dDriver` capability every drawing sink implements
//! - Value Objects (Point, DriverKind)
//! - Driver commands (set-position, operate-to) and the immutable `CompoundCommand`
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Commands are immutable once built
//! - Drivers compose by wrapping other drivers
//! - Testable in isolation

pub mod command;
pub mod driver;
pub mod error;

// Re-export commonly used types
pub use command::{
    CommandRef, CompoundCommand, CompoundCommandBuilder, DriverCommand, OperateToCommand,
    SetPositionCommand,
};
pub use driver::{BoxedDriver, DriverKind, Job2dDriver, Point};
pub use error::{DomainError, Result};
