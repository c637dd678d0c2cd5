use domain::{DomainError, Job2dDriver, Point, Result};
use serde::{Deserialize, Serialize};

/// Rectangular working area of a plotter, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Result<Self> {
        let bounds = Self {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check min <= max on both axes
    pub fn validate(&self) -> Result<()> {
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(DomainError::InvalidConfiguration(format!(
                "empty bounds: x {}..={}, y {}..={}",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Rejects coordinates outside the working area instead of forwarding them
#[derive(Debug)]
pub struct BoundedDriver<D> {
    delegate: D,
    bounds: Bounds,
}

impl<D: Job2dDriver> BoundedDriver<D> {
    pub fn new(delegate: D, bounds: Bounds) -> Self {
        Self { delegate, bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn check(&self, x: i32, y: i32) -> Result<()> {
        let target = Point::new(x, y);
        if !self.bounds.contains(target) {
            tracing::warn!(
                driver = %self.delegate.describe(),
                "Rejected {} outside work area",
                target
            );
            return Err(DomainError::DriverRejected(format!(
                "{} is outside the work area",
                target
            )));
        }
        Ok(())
    }
}

impl<D: Job2dDriver> Job2dDriver for BoundedDriver<D> {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        self.check(x, y)?;
        self.delegate.set_position(x, y)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.check(x, y)?;
        self.delegate.operate_to(x, y)
    }

    fn describe(&self) -> String {
        self.delegate.describe()
    }
}
