use domain::{CommandRef, Result};
use infrastructure::drivers::{Canvas, Line, LineDriver};
use tracing::warn;

use crate::command::CommandObserver;

/// Renders the current command as line segments before it is dispatched.
///
/// Clones share one canvas: register a clone with the `CommandManager` and
/// read the lines through another.
#[derive(Debug, Clone, Default)]
pub struct CommandPreview {
    canvas: Canvas,
}

impl CommandPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(canvas: Canvas) -> Self {
        Self { canvas }
    }

    /// Clear the canvas and draw `command` on it
    pub fn update_preview(&self, command: Option<&CommandRef>) -> Result<()> {
        self.canvas.clear();

        if let Some(command) = command {
            let mut driver = LineDriver::new(self.canvas.clone(), "preview");
            command.execute(&mut driver)?;
        }
        Ok(())
    }

    pub fn lines(&self) -> Vec<Line> {
        self.canvas.lines()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl CommandObserver for CommandPreview {
    fn on_command_changed(&mut self, command: Option<&CommandRef>) {
        if let Err(e) = self.update_preview(command) {
            warn!("Preview failed: {}", e);
        }
    }
}
