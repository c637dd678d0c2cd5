use domain::{Job2dDriver, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single call received by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverCall {
    SetPosition { x: i32, y: i32 },
    OperateTo { x: i32, y: i32 },
}

/// Driver that keeps every call it receives.
///
/// Clones share the same call log, so a test can hand one clone to a
/// decorator chain and inspect the other.
#[derive(Debug, Clone)]
pub struct RecordingDriver {
    name: String,
    calls: Arc<Mutex<Vec<DriverCall>>>,
}

impl RecordingDriver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Job2dDriver for RecordingDriver {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        self.calls.lock().push(DriverCall::SetPosition { x, y });
        Ok(())
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.calls.lock().push(DriverCall::OperateTo { x, y });
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let recorder = RecordingDriver::new("rec");
        let mut handle = recorder.clone();

        handle.set_position(1, 2).unwrap();
        handle.operate_to(3, 4).unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                DriverCall::SetPosition { x: 1, y: 2 },
                DriverCall::OperateTo { x: 3, y: 4 },
            ]
        );

        recorder.clear();
        assert!(handle.calls().is_empty());
    }

    #[test]
    fn test_call_serializes_with_type_tag() {
        let json = serde_json::to_value(DriverCall::OperateTo { x: 1, y: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "OperateTo", "x": 1, "y": 2}));
    }
}
