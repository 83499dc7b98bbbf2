//! Bootloader button watch
//!
//! Core 0's SysTick samples the button's latched falling edge every
//! [`WATCH_PERIOD_MS`] and reboots into the USB bootloader on a press. It
//! preempts the sensor loop, so the button still works while core 0 waits on
//! a full FIFO or sits halted after a bus error.

use core::cell::RefCell;

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;
use defmt::*;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::PIN_6;
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use tiltlink_core::pipeline::ReentryButton;
use tiltlink_hal_rp2040::bootsel::reboot_to_bootloader;
use tiltlink_hal_rp2040::gpio::Rp2040Input;

/// SysTick period
pub const WATCH_PERIOD_MS: u32 = 10;

type Button = ReentryButton<Rp2040Input<'static>>;

static BUTTON: Mutex<CriticalSectionRawMutex, RefCell<Option<Button>>> =
    Mutex::new(RefCell::new(None));

/// Configure the button and start the SysTick watch
///
/// Must run on core 0; SysTick is per core.
pub fn arm(pin: Peri<'static, PIN_6>, mut syst: SYST) {
    let button = ReentryButton::new(Rp2040Input::new(pin, Pull::Up));
    if button.is_held() {
        warn!("Bootloader button held at boot; release it to arm");
    }
    BUTTON.lock(|cell| *cell.borrow_mut() = Some(button));

    // 1.25M cycles at 125 MHz, inside the 24-bit reload range
    let reload = clk_sys_freq() / 1000 * WATCH_PERIOD_MS - 1;
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    info!("Bootloader button armed on GPIO6");
}

#[exception]
fn SysTick() {
    let pressed = BUTTON.lock(|cell| {
        cell.borrow_mut()
            .as_mut()
            .is_some_and(|button| button.poll())
    });

    if pressed {
        info!("Bootloader button pressed, rebooting to USB boot");
        reboot_to_bootloader();
    }
}
