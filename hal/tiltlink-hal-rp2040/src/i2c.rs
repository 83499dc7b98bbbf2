//! Blocking I2C controller for RP2040
//!
//! Wraps embassy-rp's blocking I2C driver so the sensor and display drivers
//! can be written against `tiltlink_hal::I2cBus`.

use embassy_rp::i2c::{AbortReason, Blocking, Error as I2cError, I2c, Instance};

use tiltlink_hal::{I2cBus, I2cBusError, I2cConfig};

/// Build an embassy-rp I2C configuration from the shared one
pub fn config(bus: I2cConfig) -> embassy_rp::i2c::Config {
    let mut config = embassy_rp::i2c::Config::default();
    config.frequency = bus.frequency;
    config
}

/// Map an embassy-rp I2C error onto the shared error type
pub fn map_error(e: I2cError) -> I2cBusError {
    match e {
        I2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
        I2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
        I2cError::Abort(_) => I2cBusError::Bus,
        _ => I2cBusError::Other,
    }
}

/// Blocking I2C controller
pub struct BlockingI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BlockingI2c<'d, T> {
    /// Wrap a configured embassy-rp blocking I2C controller
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<'d, T: Instance> I2cBus for BlockingI2c<'d, T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_write(address, data).map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_read(address, buf).map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.i2c
            .blocking_write_read(address, write_data, read_buf)
            .map_err(map_error)
    }
}
