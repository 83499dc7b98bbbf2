//! Tiltlink Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the tilt monitor
//! pipeline is written against. Chip-specific HALs (currently only the
//! RP2040) implement them, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tiltlink-core / tiltlink-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tiltlink-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tiltlink-hal- │       │  host mocks   │
//! │    rp2040     │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::EdgeInputPin`] - Input with a latched falling-edge flag
//! - [`i2c::I2cBus`] - Blocking I2C master operations
//! - [`fifo::FifoTx`], [`fifo::FifoRx`] - Inter-core word FIFO endpoints

#![no_std]
#![deny(unsafe_code)]

pub mod fifo;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use fifo::{FifoRx, FifoTx};
pub use gpio::{EdgeInputPin, InputPin, OutputPin};
pub use i2c::{I2cBus, I2cBusError, I2cConfig};
