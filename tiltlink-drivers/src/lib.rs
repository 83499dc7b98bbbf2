//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tiltlink-core, on top of the bus traits from tiltlink-hal:
//!
//! - IMU drivers (MPU6050)
//! - Display drivers (SSD1306)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod imu;

#[cfg(test)]
pub(crate) mod testing;
