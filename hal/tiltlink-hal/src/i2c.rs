//! I2C bus abstractions
//!
//! Provides traits for blocking I2C master operations that can be implemented
//! by chip-specific HALs. Both the sensor and the display sit on their own
//! I2C controller, so no bus sharing is modelled here.

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge its address or a data byte
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Bus error (misplaced start/stop, stuck line)
    Bus,
    /// Transfer did not complete in time
    Timeout,
    /// Other error
    Other,
}

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. All calls block the calling core until the
/// transfer finishes or fails.
pub trait I2cBus {
    /// Write data to a device at the given address, ending with a stop
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError>;

    /// Write then read in a single transaction (repeated start, no stop)
    ///
    /// This is how a register address is selected before a burst read.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), used for both the MPU6050 and the SSD1306
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
