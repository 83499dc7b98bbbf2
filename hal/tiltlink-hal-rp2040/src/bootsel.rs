//! USB bootloader re-entry

/// Reboot into the boot ROM's USB mass-storage bootloader
///
/// Never returns. No GPIO is used as an activity light and both the
/// mass-storage and PICOBOOT interfaces stay enabled.
pub fn reboot_to_bootloader() -> ! {
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);

    // The ROM resets the chip through the watchdog; wait for it
    loop {
        cortex_m::asm::wfi();
    }
}
