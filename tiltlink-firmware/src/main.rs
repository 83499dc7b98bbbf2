//! Tiltlink - Dual-Core Tilt Monitor Firmware
//!
//! Main firmware binary for RP2040 boards with an MPU6050 and an SSD1306.
//!
//! - Core 0 reads the sensor, computes roll and pitch, and pushes them to
//!   core 1 as two fixed-point words over the SIO FIFO.
//! - Core 1 pops the pair, blinks the indicator LED and redraws the display.
//! - Core 0's SysTick watches the GPIO6 button and reboots into the USB
//!   bootloader on a press.
//!
//! The FIFO is the only link between the cores. Both run plain blocking
//! loops.

#![no_std]
#![no_main]

use defmt::*;
use embassy_rp::multicore::{spawn_core1, Stack};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod tasks;

use tasks::{ConsumerResources, ProducerResources};

/// Core 1 stack; the display frame buffer lives on it
const CORE1_STACK_SIZE: usize = 8 * 1024;

static mut CORE1_STACK: Stack<CORE1_STACK_SIZE> = Stack::new();

/// Main entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Tiltlink firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::BOARD;
    info!("Board config: {}", config);

    let consumer = ConsumerResources {
        i2c: p.I2C1,
        sda: p.PIN_14,
        scl: p.PIN_15,
        led: p.PIN_12,
    };

    spawn_core1(
        p.CORE1,
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || tasks::consumer::run(consumer, config),
    );

    match cortex_m::Peripherals::take() {
        Some(cp) => tasks::reentry::arm(p.PIN_6, cp.SYST),
        None => warn!("Core peripherals already taken, bootloader button disabled"),
    }

    let producer = ProducerResources {
        i2c: p.I2C0,
        sda: p.PIN_0,
        scl: p.PIN_1,
    };

    tasks::producer::run(producer, config)
}
