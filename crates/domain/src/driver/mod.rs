mod driver_kind;
mod job2d_driver;
mod point;

pub use driver_kind::DriverKind;
pub use job2d_driver::{BoxedDriver, Job2dDriver};
#[cfg(test)]
pub use job2d_driver::MockJob2dDriver;
pub use point::Point;
