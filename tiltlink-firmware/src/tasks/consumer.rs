//! Core 1: display loop
//!
//! Pops `[roll, pitch]` from core 0, toggles the indicator LED and redraws
//! the SSD1306 on I2C1. Display errors are logged and skipped.

use defmt::*;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::{I2C1, PIN_12, PIN_14, PIN_15};
use embassy_rp::Peri;

use tiltlink_core::channel::ChannelRx;
use tiltlink_core::config::PipelineConfig;
use tiltlink_core::pipeline::Consumer;
use tiltlink_core::traits::{DisplayError, DisplaySurface};
use tiltlink_drivers::display::Ssd1306;
use tiltlink_hal_rp2040::fifo::SioFifoRx;
use tiltlink_hal_rp2040::gpio::Rp2040Output;
use tiltlink_hal_rp2040::i2c::{self, BlockingI2c};
use tiltlink_hal_rp2040::I2cBus;

/// Peripherals owned by core 1
pub struct ConsumerResources {
    pub i2c: Peri<'static, I2C1>,
    pub sda: Peri<'static, PIN_14>,
    pub scl: Peri<'static, PIN_15>,
    pub led: Peri<'static, PIN_12>,
}

/// Run the display loop forever
///
/// Must run on core 1.
pub fn run(res: ConsumerResources, config: PipelineConfig) -> ! {
    // Before anything else: core 0 starts pushing as soon as the sensor is up
    let fifo = SioFifoRx::new().take_from_pause_handler();

    info!("Core 1: display loop starting");

    let bus = I2c::new_blocking(
        res.i2c,
        res.scl,
        res.sda,
        i2c::config(config.i2c_config()),
    );
    let mut display = Ssd1306::with_address(BlockingI2c::new(bus), config.display_address);

    match bring_up(&mut display) {
        Ok(()) => info!("SSD1306 ready at {=u8:#x}", config.display_address),
        Err(e) => warn!("SSD1306 init failed: {}", e),
    }

    let led = Rp2040Output::new(Output::new(res.led, Level::Low));
    let mut consumer = Consumer::new(ChannelRx::new(fifo), display, led);

    loop {
        match consumer.cycle() {
            Ok(orientation) => {
                trace!(
                    "Core 1: [R: {=f32}, P: {=f32}]",
                    orientation.roll,
                    orientation.pitch
                );
            }
            Err(e) => warn!("Display update failed: {}", e),
        }
    }
}

/// Initialize the panel and blank it
fn bring_up<I: I2cBus>(display: &mut Ssd1306<I>) -> Result<(), DisplayError> {
    display.init()?;
    display.clear()?;
    display.flush()
}
