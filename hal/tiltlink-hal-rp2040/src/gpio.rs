//! GPIO wrappers
//!
//! Newtypes over embassy-rp pins that implement the shared GPIO traits.

use embassy_rp::gpio::{Input, Output, Pin, Pull};
use embassy_rp::{pac, Peri};

use tiltlink_hal::{EdgeInputPin, InputPin, OutputPin};

/// Push-pull output pin (indicator LED)
pub struct Rp2040Output<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2040Output<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> OutputPin for Rp2040Output<'d> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input pin (bootloader button)
///
/// Falling edges are read from the raw `IO_BANK0` interrupt status, which
/// latches edges whether or not the interrupt is enabled. The pin's
/// interrupt enable is left untouched, so embassy's bank handler never sees
/// it.
pub struct Rp2040Input<'d> {
    pin: Input<'d>,
    line: u8,
}

impl<'d> Rp2040Input<'d> {
    pub fn new<P: Pin>(pin: Peri<'d, P>, pull: Pull) -> Self {
        let line = pin.pin();
        Self {
            pin: Input::new(pin, pull),
            line,
        }
    }
}

impl<'d> InputPin for Rp2040Input<'d> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl<'d> EdgeInputPin for Rp2040Input<'d> {
    fn take_falling_edge(&mut self) -> bool {
        // INTR0..3 hold eight pins each, four event bits per pin
        let intr = pac::IO_BANK0.intr(usize::from(self.line / 8));
        let group = usize::from(self.line % 8);

        let latched = intr.read().edge_low(group);
        if latched {
            // Edge bits are write-1-to-clear
            intr.write(|w| w.set_edge_low(group, true));
        }
        latched
    }
}
