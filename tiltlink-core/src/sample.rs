//! Raw IMU sample

/// Gyroscope sensitivity at the power-on ±250 °/s range, LSB per °/s
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;

/// One burst of raw register values from the IMU
///
/// Values are the signed 16-bit counts exactly as the device reports them.
/// A sample lives for one producer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Acceleration X/Y/Z
    pub accel: [i16; 3],
    /// Angular rate X/Y/Z
    pub gyro: [i16; 3],
    /// Die temperature
    pub temperature: i16,
}

impl RawSample {
    /// Sample with only acceleration populated
    pub const fn from_accel(x: i16, y: i16, z: i16) -> Self {
        Self {
            accel: [x, y, z],
            gyro: [0; 3],
            temperature: 0,
        }
    }

    /// Die temperature in °C (MPU6050 datasheet: raw / 340 + 36.53)
    pub fn temperature_celsius(&self) -> f32 {
        self.temperature as f32 / 340.0 + 36.53
    }

    /// Angular rate in °/s for the given sensitivity (LSB per °/s)
    pub fn gyro_dps(&self, sensitivity: f32) -> [f32; 3] {
        self.gyro.map(|raw| raw as f32 / sensitivity)
    }
}
