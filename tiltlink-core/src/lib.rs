//! Board-agnostic pipeline logic for the tilt monitor firmware
//!
//! This crate contains everything between the sensor registers and the
//! display that does not depend on a specific chip:
//!
//! - Raw sample and orientation math
//! - Hardware abstraction traits (IMU, display surface)
//! - Two-word framed endpoints over the inter-core FIFO
//! - Producer (sensor core) and consumer (display core) cycle logic
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod orientation;
pub mod pipeline;
pub mod sample;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use tiltlink_protocol::{decode, encode, Orientation, WireMessage};
