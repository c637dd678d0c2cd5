use std::sync::Arc;

use domain::{CommandRef, CompoundCommand, Job2dDriver, Result};
use tracing::{debug, info, warn};

use super::CommandHistory;

/// Notified whenever the current command changes
pub trait CommandObserver: Send {
    fn on_command_changed(&mut self, command: Option<&CommandRef>);
}

/// Holds the current command and records every change in a `CommandHistory`
pub struct CommandManager {
    current: Option<CommandRef>,
    history: Arc<CommandHistory>,
    observers: Vec<Box<dyn CommandObserver>>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::with_history(Arc::new(CommandHistory::new()))
    }

    /// Record into a history shared with other readers
    pub fn with_history(history: Arc<CommandHistory>) -> Self {
        Self {
            current: None,
            history,
            observers: Vec::new(),
        }
    }

    pub fn set_current_command(&mut self, command: CommandRef) {
        info!("Current command set to {}", command.describe());
        self.history.add_command(Some(command.clone()));
        self.current = Some(command);
        self.notify();
    }

    /// Snapshot `commands` into a compound and make it current
    pub fn set_current_commands(&mut self, commands: &[CommandRef]) {
        let compound = CompoundCommand::from_list_of_commands(commands);
        self.set_current_command(Arc::new(compound));
    }

    pub fn clear_current_command(&mut self) {
        info!("Current command cleared");
        self.history.add_command(None);
        self.current = None;
        self.notify();
    }

    pub fn current_command(&self) -> Option<CommandRef> {
        self.current.clone()
    }

    pub fn current_command_description(&self) -> String {
        match &self.current {
            Some(command) => command.describe(),
            None => "No command loaded".to_string(),
        }
    }

    /// Execute the current command against `driver`; a no-op when none is set
    pub fn run_current_command(&self, driver: &mut dyn Job2dDriver) -> Result<()> {
        match &self.current {
            Some(command) => {
                debug!(driver = %driver.describe(), "Running {}", command.describe());
                command.execute(driver)
            }
            None => {
                warn!("No command loaded, nothing to run");
                Ok(())
            }
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn CommandObserver>) {
        self.observers.push(observer);
    }

    pub fn history(&self) -> Arc<CommandHistory> {
        Arc::clone(&self.history)
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.on_command_changed(self.current.as_ref());
        }
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}
