use domain::{Job2dDriver, Point, Result};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Kind of head movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Reposition without marking
    Move,
    /// Draw while moving
    Draw,
}

impl Movement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Draw => "draw",
        }
    }
}

/// Point-in-time view of the usage counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UsageSnapshot {
    pub last_position: Point,
    pub travel_distance: f64,
    pub drawing_distance: f64,
}

/// Distance and totals produced by one registered movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRecord {
    pub segment: f64,
    pub travel_distance: f64,
    pub drawing_distance: f64,
    /// Reset generation the segment was measured in
    pub epoch: u64,
}

#[derive(Debug, Default)]
struct MeterState {
    usage: UsageSnapshot,
    epoch: u64,
}

/// Shared usage counters of a tracked driver.
///
/// The decorator owns one handle and monitoring code may hold clones to read
/// or reset the counters from another thread. Accumulation and reset each run
/// under the same lock. Every reset starts a new epoch; a position recorded
/// for an older epoch is dropped, so a reset during an in-flight call keeps
/// the origin as the measuring base.
#[derive(Debug, Clone, Default)]
pub struct UsageMeter {
    state: Arc<Mutex<MeterState>>,
}

impl UsageMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure the segment from the last position to `target` and add it
    /// to the totals.
    pub fn register(&self, target: Point, movement: Movement) -> SegmentRecord {
        let mut state = self.state.lock();
        let segment = state.usage.last_position.distance_to(target);
        state.usage.travel_distance += segment;
        if movement == Movement::Draw {
            state.usage.drawing_distance += segment;
        }
        SegmentRecord {
            segment,
            travel_distance: state.usage.travel_distance,
            drawing_distance: state.usage.drawing_distance,
            epoch: state.epoch,
        }
    }

    /// Record that the head reached `position`.
    ///
    /// Ignored when the meter was reset after the segment was registered in
    /// `epoch`. Returns whether the position was stored.
    pub fn move_to(&self, position: Point, epoch: u64) -> bool {
        let mut state = self.state.lock();
        if state.epoch != epoch {
            return false;
        }
        state.usage.last_position = position;
        true
    }

    pub fn travel_distance(&self) -> f64 {
        self.state.lock().usage.travel_distance
    }

    pub fn drawing_distance(&self) -> f64 {
        self.state.lock().usage.drawing_distance
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        self.state.lock().usage
    }

    pub fn epoch(&self) -> u64 {
        self.state.lock().epoch
    }

    /// Zero both distances and move the measuring base back to the origin.
    ///
    /// The next segment is measured from (0, 0), not from where the head
    /// physically is.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.usage = UsageSnapshot::default();
        state.epoch = state.epoch.wrapping_add(1);
    }
}

/// Wraps a driver and accumulates travel and drawing distance.
///
/// Every call emits one `info` event before it is forwarded, so a failing
/// delegate still leaves a trace. The last position only advances when the
/// delegate accepted the call.
#[derive(Debug)]
pub struct UsageTrackingDriverDecorator<D> {
    delegate: D,
    label: String,
    meter: UsageMeter,
}

impl<D: Job2dDriver> UsageTrackingDriverDecorator<D> {
    pub fn new(delegate: D, label: impl Into<String>) -> Self {
        Self::with_meter(delegate, label, UsageMeter::new())
    }

    /// Wrap `delegate` reporting into an existing meter
    pub fn with_meter(delegate: D, label: impl Into<String>, meter: UsageMeter) -> Self {
        Self {
            delegate,
            label: label.into(),
            meter,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn travel_distance(&self) -> f64 {
        self.meter.travel_distance()
    }

    pub fn drawing_distance(&self) -> f64 {
        self.meter.drawing_distance()
    }

    /// Handle onto the counters, valid after the decorator is moved or dropped
    pub fn meter(&self) -> UsageMeter {
        self.meter.clone()
    }

    pub fn reset(&self) {
        self.meter.reset();
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Detach the decorator and return the wrapped driver
    pub fn into_inner(self) -> D {
        self.delegate
    }

    fn track(&mut self, x: i32, y: i32, movement: Movement) -> Result<()> {
        let target = Point::new(x, y);
        let record = self.meter.register(target, movement);

        info!(
            label = %self.label,
            op = movement.as_str(),
            "[{}] {} to ({}, {}); segment={:.2}; travel={:.2}; ink={:.2}",
            self.label,
            movement.as_str(),
            x,
            y,
            record.segment,
            record.travel_distance,
            record.drawing_distance
        );

        match movement {
            Movement::Move => self.delegate.set_position(x, y)?,
            Movement::Draw => self.delegate.operate_to(x, y)?,
        }

        self.meter.move_to(target, record.epoch);
        Ok(())
    }
}

impl<D: Job2dDriver> Job2dDriver for UsageTrackingDriverDecorator<D> {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        self.track(x, y, Movement::Move)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.track(x, y, Movement::Draw)
    }

    fn describe(&self) -> String {
        format!("{} [tracked]", self.delegate.describe())
    }
}
