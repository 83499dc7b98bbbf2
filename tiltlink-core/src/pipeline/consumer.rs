//! Display-core cycle
//!
//! pop `[roll, pitch]` → decode → toggle indicator → redraw dashboard

use tiltlink_hal::{FifoRx, OutputPin};
use tiltlink_protocol::{decode, Orientation};

use crate::channel::ChannelRx;
use crate::traits::{DisplayError, DisplaySurface};

use super::dashboard;

/// Drains the inter-core channel onto the display
pub struct Consumer<R, D, L> {
    rx: ChannelRx<R>,
    display: D,
    indicator: L,
}

impl<R: FifoRx, D: DisplaySurface, L: OutputPin> Consumer<R, D, L> {
    /// Create a consumer from an initialized display and the indicator pin
    pub fn new(rx: ChannelRx<R>, display: D, indicator: L) -> Self {
        Self {
            rx,
            display,
            indicator,
        }
    }

    /// Run one cycle
    ///
    /// Blocks until a whole message has arrived. The indicator toggles once
    /// per message before anything is drawn, so it keeps blinking even when
    /// the display stops responding. The decoded orientation is returned on
    /// success; on a display error the message is still consumed.
    pub fn cycle(&mut self) -> Result<Orientation, DisplayError> {
        let message = self.rx.recv();
        let orientation = decode(message);

        self.indicator.toggle();
        dashboard::render(&mut self.display, &orientation)?;

        Ok(orientation)
    }

    /// Access the display
    pub fn display(&mut self) -> &mut D {
        &mut self.display
    }

    /// Access the indicator pin
    pub fn indicator(&self) -> &L {
        &self.indicator
    }
}
