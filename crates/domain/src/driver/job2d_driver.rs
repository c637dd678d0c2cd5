use crate::error::Result;

/// Drawing capability implemented by every plotter sink and every decorator.
///
/// A decorator holds another `Job2dDriver` and forwards to it, so chains of
/// any depth are themselves drivers. Calls take `&mut self`: a driver instance
/// has a single caller at a time.
#[cfg_attr(test, mockall::automock)]
pub trait Job2dDriver: Send {
    /// Move the head to (x, y) without marking
    fn set_position(&mut self, x: i32, y: i32) -> Result<()>;

    /// Move the head to (x, y) while drawing
    fn operate_to(&mut self, x: i32, y: i32) -> Result<()>;

    /// Human readable identity, used as the default monitoring label
    fn describe(&self) -> String;
}

/// Owned, type-erased driver as stored by managers and decorators
pub type BoxedDriver = Box<dyn Job2dDriver>;

impl<D: Job2dDriver + ?Sized> Job2dDriver for Box<D> {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        (**self).set_position(x, y)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        (**self).operate_to(x, y)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<D: Job2dDriver + ?Sized> Job2dDriver for &mut D {
    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        (**self).set_position(x, y)
    }

    fn operate_to(&mut self, x: i32, y: i32) -> Result<()> {
        (**self).operate_to(x, y)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use mockall::predicate::eq;

    #[test]
    fn test_boxed_driver_forwards_calls() {
        let mut mock = MockJob2dDriver::new();
        mock.expect_set_position()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Ok(()));
        mock.expect_operate_to()
            .with(eq(3), eq(4))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut boxed: BoxedDriver = Box::new(mock);
        boxed.set_position(1, 2).unwrap();
        boxed.operate_to(3, 4).unwrap();
    }

    fn draw_origin<D: Job2dDriver>(mut driver: D) -> (String, Result<()>) {
        (driver.describe(), driver.operate_to(0, 0))
    }

    #[test]
    fn test_mut_reference_is_a_driver() {
        let mut mock = MockJob2dDriver::new();
        mock.expect_describe().return_const("plotter".to_string());
        mock.expect_operate_to()
            .returning(|_, _| Err(DomainError::DriverRejected("out of paper".into())));

        let (label, result) = draw_origin(&mut mock);
        assert_eq!(label, "plotter");
        assert_eq!(
            result,
            Err(DomainError::DriverRejected("out of paper".into()))
        );
    }
}
