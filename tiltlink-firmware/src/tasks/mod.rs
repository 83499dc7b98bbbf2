//! Per-core run loops
//!
//! Each core runs exactly one of these and never returns. They are plain
//! blocking loops; no executor runs on either core. The bootloader button is
//! watched from core 0's SysTick exception instead of a loop.

pub mod consumer;
pub mod producer;
pub mod reentry;

pub use consumer::ConsumerResources;
pub use producer::ProducerResources;
