//! Hardware abstraction traits
//!
//! These traits define the interface between the pipeline logic
//! and hardware-specific implementations.

pub mod display;
pub mod imu;

pub use display::{DisplayError, DisplaySurface};
pub use imu::{ImuError, ImuSensor};
