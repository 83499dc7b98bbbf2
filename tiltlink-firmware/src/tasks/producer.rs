//! Core 0: sensor loop
//!
//! Reads the MPU6050 on I2C0, pushes `[roll, pitch]` to core 1 and sleeps
//! for the configured interval.

use defmt::*;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::{I2C0, PIN_0, PIN_1};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;

use tiltlink_core::channel::ChannelTx;
use tiltlink_core::config::{AccelRange, PipelineConfig};
use tiltlink_core::pipeline::Producer;
use tiltlink_core::sample::GYRO_SENSITIVITY_250DPS;
use tiltlink_core::traits::ImuError;
use tiltlink_drivers::imu::Mpu6050;
use tiltlink_hal_rp2040::fifo::SioFifoTx;
use tiltlink_hal_rp2040::i2c::{self, BlockingI2c};
use tiltlink_hal_rp2040::I2cBus;

/// Peripherals owned by core 0
pub struct ProducerResources {
    pub i2c: Peri<'static, I2C0>,
    pub sda: Peri<'static, PIN_0>,
    pub scl: Peri<'static, PIN_1>,
}

/// Run the sensor loop forever
///
/// A failed bus transfer is fatal: it is logged and the core halts, which
/// leaves the display frozen on the last value. Interrupts stay enabled, so
/// the bootloader button keeps working.
pub fn run(res: ProducerResources, config: PipelineConfig) -> ! {
    info!("Core 0: sensor loop starting");

    let bus = I2c::new_blocking(
        res.i2c,
        res.scl,
        res.sda,
        i2c::config(config.i2c_config()),
    );
    let mut imu = Mpu6050::with_address(BlockingI2c::new(bus), Delay, config.sensor_address);

    bring_up(&mut imu, &config);

    let mut producer = Producer::new(imu, ChannelTx::new(SioFifoTx::new()));
    let mut delay = Delay;

    loop {
        match producer.cycle() {
            Ok(report) => {
                if let Ok(line) = report.status() {
                    info!("Core 0: {=str}", line.as_str());
                }

                let [gx, gy, gz] = report.sample.gyro_dps(GYRO_SENSITIVITY_250DPS);
                debug!(
                    "temp {=f32} C, gyro [{=f32}, {=f32}, {=f32}] dps",
                    report.sample.temperature_celsius(),
                    gx,
                    gy,
                    gz
                );

                if report.blocked {
                    debug!("FIFO was full, waited for core 1");
                }
            }
            Err(e) => {
                error!("IMU read failed: {}", e);
                halt();
            }
        }

        delay.delay_ms(config.sample_interval_ms);
    }
}

/// Reset the sensor and apply the board configuration
fn bring_up<I: I2cBus, D: DelayNs>(
    imu: &mut Mpu6050<I, D>,
    config: &PipelineConfig,
) {
    if let Err(e) = imu.reset() {
        error!("MPU6050 reset failed: {}", e);
        halt();
    }

    if config.verify_identity {
        match imu.verify_identity() {
            Ok(()) => info!("MPU6050 found at {=u8:#x}", config.sensor_address),
            // Clones answer at other IDs but share the register map
            Err(ImuError::WrongDevice(id)) => warn!("Unexpected WHO_AM_I {=u8:#x}", id),
            Err(e) => {
                error!("MPU6050 identity read failed: {}", e);
                halt();
            }
        }
    }

    if config.accel_range != AccelRange::G2 {
        if let Err(e) = imu.set_accel_range(config.accel_range) {
            error!("Setting accelerometer range failed: {}", e);
            halt();
        }
        info!("Accelerometer range {}", config.accel_range);
    }
}

/// Stop the sensor loop for good
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
