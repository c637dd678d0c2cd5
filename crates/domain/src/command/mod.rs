mod compound;
mod driver_command;
mod primitives;

pub use compound::{CompoundCommand, CompoundCommandBuilder};
pub use driver_command::{CommandRef, DriverCommand};
pub use primitives::{OperateToCommand, SetPositionCommand};
