//! Inter-core FIFO abstractions
//!
//! The only link between the two cores is a bounded hardware queue of
//! 32-bit words. Each core owns exactly one end of it: the producer core
//! holds a [`FifoTx`], the consumer core a [`FifoRx`]. The queue carries raw
//! words and knows nothing about message boundaries; framing is agreed
//! out of band by the two endpoints.

/// Push-only end of the inter-core FIFO
pub trait FifoTx {
    /// Push one word, blocking the calling core until the queue has room
    ///
    /// Returns only after the word has been accepted.
    fn push_blocking(&mut self, word: u32);

    /// Check whether a push would be accepted without blocking
    fn is_ready(&self) -> bool;
}

/// Pop-only end of the inter-core FIFO
pub trait FifoRx {
    /// Pop one word, blocking the calling core until one is available
    ///
    /// Words come out in the order they were pushed.
    fn pop_blocking(&mut self) -> u32;

    /// Check whether a word is waiting
    fn has_data(&self) -> bool;
}

impl<T: FifoTx + ?Sized> FifoTx for &mut T {
    fn push_blocking(&mut self, word: u32) {
        T::push_blocking(self, word)
    }

    fn is_ready(&self) -> bool {
        T::is_ready(self)
    }
}

impl<T: FifoRx + ?Sized> FifoRx for &mut T {
    fn pop_blocking(&mut self) -> u32 {
        T::pop_blocking(self)
    }

    fn has_data(&self) -> bool {
        T::has_data(self)
    }
}
