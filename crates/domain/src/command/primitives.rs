use serde::{Deserialize, Serialize};

use super::DriverCommand;
use crate::driver::{Job2dDriver, Point};
use crate::error::Result;

/// Move the head without drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetPositionCommand {
    pub x: i32,
    pub y: i32,
}

impl SetPositionCommand {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn target(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl DriverCommand for SetPositionCommand {
    fn execute(&self, driver: &mut dyn Job2dDriver) -> Result<()> {
        driver.set_position(self.x, self.y)
    }

    fn describe(&self) -> String {
        format!("SetPosition{}", self.target())
    }
}

/// Draw from the current head position to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperateToCommand {
    pub x: i32,
    pub y: i32,
}

impl OperateToCommand {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn target(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl DriverCommand for OperateToCommand {
    fn execute(&self, driver: &mut dyn Job2dDriver) -> Result<()> {
        driver.operate_to(self.x, self.y)
    }

    fn describe(&self) -> String {
        format!("OperateTo{}", self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use crate::driver::MockJob2dDriver;
    use mockall::predicate::eq;

    #[test]
    fn test_set_position_calls_set_position() {
        let mut driver = MockJob2dDriver::new();
        driver
            .expect_set_position()
            .with(eq(5), eq(-7))
            .times(1)
            .returning(|_, _| Ok(()));
        driver.expect_operate_to().never();

        SetPositionCommand::new(5, -7).execute(&mut driver).unwrap();
    }

    #[test]
    fn test_operate_to_calls_operate_to() {
        let mut driver = MockJob2dDriver::new();
        driver
            .expect_operate_to()
            .with(eq(10), eq(20))
            .times(1)
            .returning(|_, _| Ok(()));
        driver.expect_set_position().never();

        OperateToCommand::new(10, 20).execute(&mut driver).unwrap();
    }

    #[test]
    fn test_driver_error_is_returned_unchanged() {
        let mut driver = MockJob2dDriver::new();
        driver
            .expect_operate_to()
            .returning(|x, y| Err(DomainError::DriverRejected(format!("({x}, {y})"))));

        let result = OperateToCommand::new(1, 2).execute(&mut driver);
        assert_eq!(result, Err(DomainError::DriverRejected("(1, 2)".into())));
    }

    #[test]
    fn test_describe() {
        assert_eq!(SetPositionCommand::new(1, 2).describe(), "SetPosition(1, 2)");
        assert_eq!(OperateToCommand::new(-3, 4).describe(), "OperateTo(-3, 4)");
    }
}
