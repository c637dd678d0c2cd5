pub mod command_preview;

pub use command_preview::CommandPreview;
