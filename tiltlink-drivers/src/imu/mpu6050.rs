//! MPU6050 6-axis IMU over I2C
//!
//! Accelerometer, gyroscope and die temperature are read as three burst
//! transfers. The register pointer auto-increments, so each group is one
//! write of the start register followed by a repeated-start read.
//!
//! The driver does no filtering or calibration. Only the accelerometer feeds
//! the orientation; gyro and temperature are read every cycle for diagnostics.

use embedded_hal::delay::DelayNs;
use tiltlink_core::config::AccelRange;
use tiltlink_core::sample::RawSample;
use tiltlink_core::traits::{ImuError, ImuSensor};
use tiltlink_hal::I2cBus;

/// I2C address with AD0 low
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// I2C address with AD0 high
pub const ALT_ADDRESS: u8 = 0x69;

/// `WHO_AM_I` content, independent of the AD0 pin
pub const EXPECTED_ID: u8 = 0x68;

/// MPU6050 registers
mod reg {
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const TEMP_OUT_H: u8 = 0x41;
    pub const GYRO_XOUT_H: u8 = 0x43;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

/// `PWR_MGMT_1.DEVICE_RESET`
const DEVICE_RESET: u8 = 0x80;

/// Time for the reset to complete
const RESET_DELAY_MS: u32 = 100;

/// Time for the oscillator to settle after wake
const WAKE_DELAY_MS: u32 = 10;

/// MPU6050 driver
pub struct Mpu6050<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    range: AccelRange,
}

impl<I2C: I2cBus, D: DelayNs> Mpu6050<I2C, D> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            range: AccelRange::G2,
        }
    }

    /// Reset the device and wake it from sleep
    ///
    /// Must be called once before the first read. Blocks for about 110 ms.
    /// The reset also returns the accelerometer to ±2g.
    pub fn reset(&mut self) -> Result<(), ImuError> {
        self.write_register(reg::PWR_MGMT_1, DEVICE_RESET)?;
        self.delay.delay_ms(RESET_DELAY_MS);

        self.write_register(reg::PWR_MGMT_1, 0x00)?;
        self.delay.delay_ms(WAKE_DELAY_MS);

        self.range = AccelRange::G2;
        Ok(())
    }

    /// Read acceleration, angular rate and temperature
    ///
    /// No retry: the first failed transfer is returned as-is.
    pub fn read_raw(&mut self) -> Result<RawSample, ImuError> {
        let accel = self.read_triplet(reg::ACCEL_XOUT_H)?;
        let gyro = self.read_triplet(reg::GYRO_XOUT_H)?;
        let temp: [u8; 2] = self.read_block(reg::TEMP_OUT_H)?;

        Ok(RawSample {
            accel,
            gyro,
            temperature: i16::from_be_bytes(temp),
        })
    }

    /// Read the identity register
    pub fn who_am_i(&mut self) -> Result<u8, ImuError> {
        let [id] = self.read_block(reg::WHO_AM_I)?;
        Ok(id)
    }

    /// Check that the device on the bus is an MPU6050
    pub fn verify_identity(&mut self) -> Result<(), ImuError> {
        match self.who_am_i()? {
            EXPECTED_ID => Ok(()),
            other => Err(ImuError::WrongDevice(other)),
        }
    }

    /// Program the accelerometer full-scale range
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), ImuError> {
        self.write_register(reg::ACCEL_CONFIG, range.register_bits())?;
        self.range = range;
        Ok(())
    }

    /// Currently programmed accelerometer range
    pub fn accel_range(&self) -> AccelRange {
        self.range
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), ImuError> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    fn read_block<const N: usize>(&mut self, register: u8) -> Result<[u8; N], ImuError> {
        let mut buf = [0u8; N];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf)
    }

    fn read_triplet(&mut self, register: u8) -> Result<[i16; 3], ImuError> {
        let buf: [u8; 6] = self.read_block(register)?;
        Ok([
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ])
    }
}

impl<I2C: I2cBus, D: DelayNs> ImuSensor for Mpu6050<I2C, D> {
    fn read_sample(&mut self) -> Result<RawSample, ImuError> {
        self.read_raw()
    }

    fn accel_sensitivity(&self) -> f32 {
        self.range.sensitivity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBus, RecordingDelay, Transfer};
    use tiltlink_hal::I2cBusError;

    fn driver() -> Mpu6050<MockBus, RecordingDelay> {
        Mpu6050::new(MockBus::new(), RecordingDelay::default())
    }

    #[test]
    fn test_reset_sequence_and_delays() {
        let mut imu = driver();

        imu.reset().unwrap();

        let (bus, delay) = imu.release();
        let writes: heapless::Vec<&[u8], 4> = bus.writes().collect();
        assert_eq!(writes.as_slice(), &[&[0x6Bu8, 0x80][..], &[0x6Bu8, 0x00][..]]);
        assert_eq!(delay.waits_ms.as_slice(), &[100, 10]);
    }

    #[test]
    fn test_read_raw_decodes_big_endian() {
        let mut imu = driver();
        let regs = &mut imu.i2c.registers;
        regs[0x3B..0x41].copy_from_slice(&[0x40, 0x00, 0xC0, 0x00, 0x01, 0x02]);
        regs[0x41..0x43].copy_from_slice(&[0xF2, 0xB8]);
        regs[0x43..0x49].copy_from_slice(&[0x00, 0x83, 0xFF, 0x7D, 0x7F, 0xFF]);

        let sample = imu.read_raw().unwrap();

        assert_eq!(sample.accel, [16384, -16384, 0x0102]);
        assert_eq!(sample.temperature, -3400);
        assert_eq!(sample.gyro, [131, -131, i16::MAX]);
    }

    #[test]
    fn test_read_raw_burst_order() {
        let mut imu = driver();

        imu.read_raw().unwrap();

        assert_eq!(
            imu.i2c.transfers.as_slice(),
            &[
                Transfer::WriteRead(0x68, 0x3B, 6),
                Transfer::WriteRead(0x68, 0x43, 6),
                Transfer::WriteRead(0x68, 0x41, 2),
            ]
        );
    }

    #[test]
    fn test_nack_propagates() {
        let mut imu = driver();
        imu.i2c.fail_with = Some(I2cBusError::Nack);

        assert_eq!(imu.read_raw(), Err(ImuError::Bus(I2cBusError::Nack)));
        assert_eq!(imu.reset(), Err(ImuError::Bus(I2cBusError::Nack)));
    }

    #[test]
    fn test_verify_identity() {
        let mut imu = driver();
        imu.i2c.registers[0x75] = 0x68;
        assert_eq!(imu.verify_identity(), Ok(()));

        imu.i2c.registers[0x75] = 0x70;
        assert_eq!(imu.verify_identity(), Err(ImuError::WrongDevice(0x70)));
    }

    #[test]
    fn test_set_accel_range_writes_config_and_sensitivity() {
        let mut imu = driver();

        imu.set_accel_range(AccelRange::G8).unwrap();

        assert_eq!(imu.i2c.registers[0x1C], 0x10);
        assert_eq!(imu.accel_sensitivity(), 4096.0);

        imu.reset().unwrap();
        assert_eq!(imu.accel_range(), AccelRange::G2);
    }

    #[test]
    fn test_alternate_address() {
        let mut imu = Mpu6050::with_address(MockBus::new(), RecordingDelay::default(), ALT_ADDRESS);

        imu.who_am_i().unwrap();

        assert_eq!(imu.i2c.transfers[0], Transfer::WriteRead(0x69, 0x75, 1));
    }
}
