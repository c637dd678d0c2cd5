use domain::{Job2dDriver, Point, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Straight segment drawn on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// Shared drawing surface holding the lines drawn so far
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_line(&self, line: Line) {
        self.lines.lock().push(line);
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Pen plotter model drawing onto a `Canvas`.
///
/// `set_position` lifts the pen and moves it, `operate_to` draws a line from
/// the pen position to the target and leaves the pen there.
#[derive(Debug, Clone)]
pub struct LineDriver {
    name: String,
    canvas: Canvas,
    pen: Point,
}

impl LineDriver {
    pub fn new(canvas: Canvas, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            canvas,
            pen: Point::ORIGIN,
        }
    }

    pub fn pen(&self) -> Point {
        self.pen
    }
}

impl Job2dDriver for LineDriver {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        self.pen = Point::new(x, y);
        Ok(())
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        let to = Point::new(x, y);
        self.canvas.draw_line(Line { from: self.pen, to });
        self.pen = to;
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
