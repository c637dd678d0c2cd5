use domain::{DomainError, Job2dDriver, Result};

/// Scales every coordinate before forwarding to the wrapped driver.
///
/// Scaled values are truncated toward zero, so `0.5 * 5` reaches the delegate
/// as `2` and `0.5 * -5` as `-2`.
#[derive(Debug)]
pub struct TransformerDriver<D> {
    delegate: D,
    scale_x: f64,
    scale_y: f64,
}

impl<D: Job2dDriver> TransformerDriver<D> {
    /// Wrap `delegate`. Non-finite scale factors are rejected.
    pub fn new(delegate: D, scale_x: f64, scale_y: f64) -> Result<Self> {
        if !scale_x.is_finite() || !scale_y.is_finite() {
            return Err(DomainError::InvalidScale(format!(
                "scale factors must be finite, got ({scale_x}, {scale_y})"
            )));
        }

        Ok(Self {
            delegate,
            scale_x,
            scale_y,
        })
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    pub fn into_inner(self) -> D {
        self.delegate
    }

    fn scale(&self, x: i32, y: i32) -> (i32, i32) {
        // `as` truncates toward zero and saturates at the i32 bounds
        (
            (f64::from(x) * self.scale_x) as i32,
            (f64::from(y) * self.scale_y) as i32,
        )
    }
}

impl<D: Job2dDriver> Job2dDriver for TransformerDriver<D> {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        let (x, y) = self.scale(x, y);
        self.delegate.set_position(x, y)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        let (x, y) = self.scale(x, y);
        self.delegate.operate_to(x, y)
    }

    fn describe(&self) -> String {
        format!("Transform: {}", self.delegate.describe())
    }
}
