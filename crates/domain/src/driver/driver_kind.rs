use serde::{Deserialize, Serialize};

/// Type of base driver a job is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DriverKind {
    /// Logs every call
    #[default]
    Logger,
    /// Records line segments on a canvas
    Line,
}

impl DriverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logger => "Logger",
            Self::Line => "Line",
        }
    }
}

impl std::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
