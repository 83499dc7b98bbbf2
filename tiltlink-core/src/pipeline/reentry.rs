//! Bootloader re-entry button
//!
//! The button is wired to ground with the internal pull-up enabled, so a
//! press is a falling edge. The pin latches that edge in hardware and the
//! firmware samples the latch from a periodic exception, independent of the
//! sensor loop.

use tiltlink_hal::EdgeInputPin;

/// Press detector for an active-low push button
pub struct ReentryButton<P> {
    pin: P,
}

impl<P: EdgeInputPin> ReentryButton<P> {
    /// Wrap a pulled-up input pin
    ///
    /// Edges latched before this call are discarded, so a button already
    /// held at startup does not count until it is released and pressed again.
    pub fn new(mut pin: P) -> Self {
        pin.take_falling_edge();
        Self { pin }
    }

    /// True once for every press since the previous poll
    pub fn poll(&mut self) -> bool {
        self.pin.take_falling_edge()
    }

    /// Whether the button is down right now
    pub fn is_held(&self) -> bool {
        self.pin.is_low()
    }
}
