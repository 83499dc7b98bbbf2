//! Configuration type definitions
//!
//! The firmware fills a [`PipelineConfig`] at build time from `board.toml`.
//! The defaults here match the reference wiring: MPU6050 at 0x68, SSD1306 at
//! 0x3C, both buses at 400 kHz, one sample every 250 ms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tiltlink_hal::I2cConfig;

/// Default MPU6050 address (AD0 tied low)
pub const DEFAULT_SENSOR_ADDRESS: u8 = 0x68;

/// Default SSD1306 address
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x3C;

/// Default I2C clock for both buses
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = I2cConfig::FAST.frequency;

/// Default pause between producer cycles
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 250;

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccelRange {
    /// ±2g, the power-on range
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    /// Counts per g at this range
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    /// `AFS_SEL` field value for the `ACCEL_CONFIG` register (bits 4:3)
    pub const fn register_bits(self) -> u8 {
        match self {
            Self::G2 => 0x00,
            Self::G4 => 0x08,
            Self::G8 => 0x10,
            Self::G16 => 0x18,
        }
    }

    /// Parse from the full-scale value in g
    pub const fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }
}

/// Everything the two cores need to know about the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Pause after each producer cycle, milliseconds
    pub sample_interval_ms: u32,
    /// Accelerometer range to program after reset
    pub accel_range: AccelRange,
    /// 7-bit I2C address of the sensor
    pub sensor_address: u8,
    /// 7-bit I2C address of the display
    pub display_address: u8,
    /// Clock for both I2C buses
    pub bus_frequency_hz: u32,
    /// Check `WHO_AM_I` before the first read
    pub verify_identity: bool,
}

impl PipelineConfig {
    pub const fn new() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            accel_range: AccelRange::G2,
            sensor_address: DEFAULT_SENSOR_ADDRESS,
            display_address: DEFAULT_DISPLAY_ADDRESS,
            bus_frequency_hz: DEFAULT_BUS_FREQUENCY_HZ,
            verify_identity: true,
        }
    }

    /// Bus settings shared by the sensor and display controllers
    pub const fn i2c_config(&self) -> I2cConfig {
        I2cConfig {
            frequency: self.bus_frequency_hz,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_wiring() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_interval_ms, 250);
        assert_eq!(config.sensor_address, 0x68);
        assert_eq!(config.display_address, 0x3C);
        assert_eq!(config.bus_frequency_hz, 400_000);
        assert_eq!(config.accel_range, AccelRange::G2);
        assert_eq!(config.i2c_config(), I2cConfig::FAST);
    }

    #[test]
    fn test_sensitivity_halves_per_step() {
        assert_eq!(AccelRange::G2.sensitivity(), 16384.0);
        assert_eq!(AccelRange::G4.sensitivity(), 8192.0);
        assert_eq!(AccelRange::G8.sensitivity(), 4096.0);
        assert_eq!(AccelRange::G16.sensitivity(), 2048.0);
    }

    #[test]
    fn test_register_bits() {
        assert_eq!(AccelRange::G2.register_bits(), 0b0000_0000);
        assert_eq!(AccelRange::G16.register_bits(), 0b0001_1000);
    }

    #[test]
    fn test_from_g() {
        assert_eq!(AccelRange::from_g(8), Some(AccelRange::G8));
        assert_eq!(AccelRange::from_g(3), None);
    }
}
