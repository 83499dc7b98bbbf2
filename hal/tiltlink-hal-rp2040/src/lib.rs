//! RP2040-specific HAL for the tilt monitor firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tiltlink-hal` traits:
//!
//! - SIO inter-core FIFO endpoints (implements `tiltlink_hal::FifoTx` / `FifoRx`)
//! - Blocking I2C controller wrapper (implements `tiltlink_hal::I2cBus`)
//! - GPIO newtypes for the indicator LED and the bootloader button
//! - USB bootloader re-entry

#![no_std]

pub mod bootsel;
pub mod fifo;
pub mod gpio;
pub mod i2c;

// Re-export shared traits from tiltlink-hal for convenience
pub use tiltlink_hal::{EdgeInputPin, FifoRx, FifoTx, I2cBus, InputPin, OutputPin};
