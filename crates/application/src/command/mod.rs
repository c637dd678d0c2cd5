pub mod history;
pub mod manager;

pub use history::CommandHistory;
pub use manager::{CommandManager, CommandObserver};
