//! SIO inter-core FIFO
//!
//! The RP2040 has two 8-deep, 32-bit wide mailboxes in the SIO block, one in
//! each direction. A core writes to `FIFO_WR` to push to the other core and
//! reads `FIFO_RD` to pop what the other core pushed, so each core sees its
//! own TX/RX pair through the same register addresses.
//!
//! Pushing signals the other core with `SEV` so that a consumer parked in
//! `WFE` re-checks the status register.
//!
//! Note: embassy-rp enables `SIO_IRQ_PROC1` on core 1 for its pause-core1
//! mechanism, and that handler pops the FIFO. The consumer core must mask it
//! (see [`SioFifoRx::take_from_pause_handler`]) before the first pop.

use embassy_rp::interrupt::{self, InterruptExt};
use embassy_rp::pac;

use tiltlink_hal::{FifoRx, FifoTx};

/// Depth of each direction of the SIO FIFO, in words
pub const SIO_FIFO_DEPTH: usize = 8;

/// Push end of the SIO FIFO as seen from the calling core
///
/// Construct exactly one, on the producer core.
pub struct SioFifoTx {
    _private: (),
}

impl Default for SioFifoTx {
    fn default() -> Self {
        Self::new()
    }
}

impl SioFifoTx {
    /// Claim the push end of the FIFO for the calling core
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl FifoTx for SioFifoTx {
    fn push_blocking(&mut self, word: u32) {
        let sio = pac::SIO;

        while !sio.fifo().st().read().rdy() {
            cortex_m::asm::nop();
        }

        sio.fifo().wr().write_value(word);

        // Wake the other core if it is parked in WFE
        cortex_m::asm::sev();
    }

    fn is_ready(&self) -> bool {
        pac::SIO.fifo().st().read().rdy()
    }
}

/// Pop end of the SIO FIFO as seen from the calling core
///
/// Construct exactly one, on the consumer core.
pub struct SioFifoRx {
    _private: (),
}

impl Default for SioFifoRx {
    fn default() -> Self {
        Self::new()
    }
}

impl SioFifoRx {
    /// Claim the pop end of the FIFO for the calling core
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Stop embassy's core-1 pause handler from consuming FIFO words
    ///
    /// Must be called from core 1 before the first pop. Flash writes that
    /// rely on pausing core 1 are not available afterwards.
    pub fn take_from_pause_handler(self) -> Self {
        interrupt::SIO_IRQ_PROC1.disable();
        self
    }
}

impl FifoRx for SioFifoRx {
    fn pop_blocking(&mut self) -> u32 {
        let sio = pac::SIO;

        while !sio.fifo().st().read().vld() {
            cortex_m::asm::wfe();
        }

        sio.fifo().rd().read()
    }

    fn has_data(&self) -> bool {
        pac::SIO.fifo().st().read().vld()
    }
}
