use std::sync::Arc;

use super::{CommandRef, DriverCommand, OperateToCommand, SetPositionCommand};
use crate::driver::Job2dDriver;
use crate::error::Result;

/// Immutable, ordered sequence of commands executed as one unit.
///
/// Every construction path copies its input, so a built compound never
/// aliases a caller's list and its sequence never changes afterwards.
/// `append` and the builder always produce a new instance.
#[derive(Debug, Clone)]
pub struct CompoundCommand {
    commands: Arc<[CommandRef]>,
}

impl CompoundCommand {
    fn new(commands: Vec<CommandRef>) -> Self {
        Self {
            commands: commands.into(),
        }
    }

    /// Snapshot `commands` into a new compound
    pub fn from_list_of_commands(commands: &[CommandRef]) -> Self {
        Self::new(commands.to_vec())
    }

    /// New compound holding this sequence followed by `commands`
    pub fn append(&self, commands: &[CommandRef]) -> Self {
        let mut combined = Vec::with_capacity(self.commands.len() + commands.len());
        combined.extend_from_slice(&self.commands);
        combined.extend_from_slice(commands);
        Self::new(combined)
    }

    pub fn builder() -> CompoundCommandBuilder {
        CompoundCommandBuilder::default()
    }

    /// Number of contained commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Read-only traversal in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CommandRef> {
        self.commands.iter()
    }
}

impl DriverCommand for CompoundCommand {
    /// Runs each command in order and stops at the first failure.
    /// Commands that already ran are not undone.
    fn execute(&self, driver: &mut dyn Job2dDriver) -> Result<()> {
        for command in self.commands.iter() {
            command.execute(driver)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("CompoundCommand({} commands)", self.commands.len())
    }
}

impl<'a> IntoIterator for &'a CompoundCommand {
    type Item = &'a CommandRef;
    type IntoIter = std::slice::Iter<'a, CommandRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CommandRef> for CompoundCommand {
    fn from_iter<I: IntoIterator<Item = CommandRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Mutable accumulator for a `CompoundCommand`.
///
/// `build` snapshots the pending list and leaves it in place, so a builder can
/// keep growing and be built again.
#[derive(Debug, Clone, Default)]
pub struct CompoundCommandBuilder {
    commands: Vec<CommandRef>,
}

impl CompoundCommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, commands: &[CommandRef]) -> &mut Self {
        self.commands.extend_from_slice(commands);
        self
    }

    /// Flattens `compound` into the pending list
    pub fn add_compound(&mut self, compound: &CompoundCommand) -> &mut Self {
        self.commands.extend(compound.iter().cloned());
        self
    }

    pub fn add_command(&mut self, command: CommandRef) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn add_set_position(&mut self, x: i32, y: i32) -> &mut Self {
        self.add_command(Arc::new(SetPositionCommand::new(x, y)))
    }

    pub fn add_operate_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.add_command(Arc::new(OperateToCommand::new(x, y)))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(&self) -> CompoundCommand {
        CompoundCommand::from_list_of_commands(&self.commands)
    }
}
