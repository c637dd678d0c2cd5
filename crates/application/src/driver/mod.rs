pub mod manager;

pub use manager::DriverManager;
