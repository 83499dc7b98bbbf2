//! Framed endpoints over the inter-core FIFO
//!
//! The FIFO moves bare words. [`ChannelTx`] and [`ChannelRx`] add the fixed
//! two-word framing on top: every message is pushed as `[roll, pitch]` and
//! popped back as a pair in the same order.
//!
//! Framing relies entirely on both ends staying in lock-step. Nothing on
//! the wire marks where a message starts, so one extra or missing word
//! shifts every pair that follows and nothing here will notice.

use tiltlink_hal::{FifoRx, FifoTx};
use tiltlink_protocol::{AssemblerState, WireMessage, WordAssembler};

/// Producer end: pushes whole messages
pub struct ChannelTx<T> {
    fifo: T,
}

impl<T: FifoTx> ChannelTx<T> {
    pub fn new(fifo: T) -> Self {
        Self { fifo }
    }

    /// Push both words of a message, blocking on each as needed
    ///
    /// Returns true if either word found the FIFO full and had to wait.
    pub fn send(&mut self, message: WireMessage) -> bool {
        let mut waited = false;
        for word in message.to_words() {
            waited |= !self.fifo.is_ready();
            self.fifo.push_blocking(word);
        }
        waited
    }

    /// Check whether the next push would go through without blocking
    pub fn is_ready(&self) -> bool {
        self.fifo.is_ready()
    }
}

/// Consumer end: pops whole messages
pub struct ChannelRx<R> {
    fifo: R,
    assembler: WordAssembler,
}

impl<R: FifoRx> ChannelRx<R> {
    pub fn new(fifo: R) -> Self {
        Self {
            fifo,
            assembler: WordAssembler::new(),
        }
    }

    /// Pop words until a full message is assembled
    ///
    /// Blocks on each word. Always consumes exactly two words.
    pub fn recv(&mut self) -> WireMessage {
        loop {
            let word = self.fifo.pop_blocking();
            if let Some(message) = self.assembler.feed(word) {
                return message;
            }
        }
    }

    /// Check whether at least one word is waiting
    pub fn has_data(&self) -> bool {
        self.fifo.has_data()
    }

    /// Position within the current message
    pub fn state(&self) -> AssemblerState {
        self.assembler.state()
    }
}
