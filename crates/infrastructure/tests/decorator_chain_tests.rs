use domain::{CompoundCommand, DriverCommand, Job2dDriver, Point, Result};
use infrastructure::drivers::{
    Canvas, DriverCall, Line, LineDriver, RecordingDriver, TransformerDriver,
    UsageTrackingDriverDecorator,
};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

fn square(side: i32) -> CompoundCommand {
    CompoundCommand::builder()
        .add_set_position(0, 0)
        .add_operate_to(side, 0)
        .add_operate_to(side, side)
        .add_operate_to(0, side)
        .add_operate_to(0, 0)
        .build()
}

#[test] // transformer_outside_tracker_measures_scaled_distances
fn transformer_outside_tracker_measures_scaled_distances() {
    let canvas = Canvas::new();
    let line = LineDriver::new(canvas.clone(), "line");
    let tracked = UsageTrackingDriverDecorator::new(line, "pen");
    let meter = tracked.meter();
    let mut chain = TransformerDriver::new(tracked, 2.0, 2.0).unwrap();

    square(5).execute(&mut chain).unwrap();

    assert_eq!(meter.drawing_distance(), 40.0);
    assert_eq!(meter.travel_distance(), 40.0);
    assert_eq!(canvas.len(), 4);
    assert_eq!(
        canvas.lines()[0],
        Line {
            from: Point::new(0, 0),
            to: Point::new(10, 0)
        }
    );
    assert_eq!(chain.describe(), "Transform: line [tracked]");
}

#[test] // tracker_outside_transformer_measures_requested_distances
fn tracker_outside_transformer_measures_requested_distances() {
    let recorder = RecordingDriver::new("rec");
    let scaled = TransformerDriver::new(recorder.clone(), 2.0, 2.0).unwrap();
    let mut chain = UsageTrackingDriverDecorator::new(scaled, "pen");

    square(5).execute(&mut chain).unwrap();

    assert_eq!(chain.drawing_distance(), 20.0);
    assert_eq!(recorder.calls()[1], DriverCall::OperateTo { x: 10, y: 0 });
    assert_eq!(chain.describe(), "Transform: rec [tracked]");
}

#[test] // stacked_transformers_truncate_at_each_stage
fn stacked_transformers_truncate_at_each_stage() {
    let recorder = RecordingDriver::new("rec");
    let inner = TransformerDriver::new(recorder.clone(), 3.0, 3.0).unwrap();
    let mut outer = TransformerDriver::new(inner, 0.5, 0.5).unwrap();

    outer.set_position(5, -5).unwrap();

    // 5 * 0.5 -> 2, then 2 * 3 -> 6
    assert_eq!(recorder.calls(), vec![DriverCall::SetPosition { x: 6, y: -6 }]);
}

#[test] // boxed_chain_behaves_like_concrete_chain
fn boxed_chain_behaves_like_concrete_chain() {
    let recorder = RecordingDriver::new("rec");
    let boxed: domain::BoxedDriver = Box::new(recorder.clone());
    let mut chain = TransformerDriver::new(boxed, 1.0, -1.0).unwrap();

    chain.operate_to(4, 4).unwrap();

    assert_eq!(recorder.calls(), vec![DriverCall::OperateTo { x: 4, y: -4 }]);
}

#[test] // counters_can_be_read_and_reset_from_another_thread
fn counters_can_be_read_and_reset_from_another_thread() {
    let mut driver = UsageTrackingDriverDecorator::new(RecordingDriver::new("rec"), "pen");
    let meter = driver.meter();

    let writer = thread::spawn(move || {
        for i in 0..1_000 {
            driver.operate_to(i % 10, 0).unwrap();
        }
        driver
    });

    let reader = thread::spawn(move || {
        for _ in 0..100 {
            let snapshot = meter.snapshot();
            assert!(snapshot.drawing_distance <= snapshot.travel_distance);
            meter.reset();
        }
    });

    reader.join().unwrap();
    let driver = writer.join().unwrap();
    assert!(driver.drawing_distance() <= driver.travel_distance());
}

/// Blocks inside every call until the test lets it continue
struct GatedDriver {
    entered: Sender<()>,
    release: Receiver<()>,
}

impl GatedDriver {
    fn pass(&self) -> Result<()> {
        self.entered.send(()).unwrap();
        self.release.recv().unwrap();
        Ok(())
    }
}

impl Job2dDriver for GatedDriver {
    fn set_position(&mut self, _x: i32, _y: i32) -> Result<()> {
        self.pass()
    }

    fn operate_to(&mut self, _x: i32, _y: i32) -> Result<()> {
        self.pass()
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}

#[test] // reset_while_call_in_flight_measures_next_segment_from_origin
fn reset_while_call_in_flight_measures_next_segment_from_origin() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let gated = GatedDriver {
        entered: entered_tx,
        release: release_rx,
    };
    let mut driver = UsageTrackingDriverDecorator::new(gated, "pen");
    let meter = driver.meter();

    let writer = thread::spawn(move || {
        driver.set_position(30, 40).unwrap();
        driver
    });

    entered_rx.recv().unwrap();
    meter.reset();
    release_tx.send(()).unwrap();
    let mut driver = writer.join().unwrap();

    let snapshot = meter.snapshot();
    assert_eq!(snapshot.travel_distance, 0.0);
    assert_eq!(snapshot.last_position, Point::ORIGIN);

    let next = thread::spawn(move || {
        driver.operate_to(3, 4).unwrap();
        driver
    });
    entered_rx.recv().unwrap();
    release_tx.send(()).unwrap();
    next.join().unwrap();

    assert_eq!(meter.travel_distance(), 5.0);
    assert_eq!(meter.drawing_distance(), 5.0);
    assert_eq!(meter.snapshot().last_position, Point::new(3, 4));
}
