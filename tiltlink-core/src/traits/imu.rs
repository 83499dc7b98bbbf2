//! Inertial sensor trait

use tiltlink_hal::I2cBusError;

use crate::orientation::ACCEL_SENSITIVITY_2G;
use crate::sample::RawSample;

/// Errors that can occur reading the IMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// Bus transaction failed (typically the device did not acknowledge)
    Bus(I2cBusError),
    /// Identity register returned an unexpected value
    WrongDevice(u8),
}

impl From<I2cBusError> for ImuError {
    fn from(e: I2cBusError) -> Self {
        ImuError::Bus(e)
    }
}

/// Trait for inertial sensors feeding the pipeline
///
/// Implementations must be reset and configured before the first
/// `read_sample` call.
pub trait ImuSensor {
    /// Read one raw sample (acceleration, angular rate, temperature)
    fn read_sample(&mut self) -> Result<RawSample, ImuError>;

    /// Accelerometer sensitivity in LSB per g for the current range
    fn accel_sensitivity(&self) -> f32 {
        ACCEL_SENSITIVITY_2G
    }
}
