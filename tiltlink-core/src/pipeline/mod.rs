//! Producer and consumer cycles
//!
//! Each core runs one of these in an endless loop. The cycle types do one
//! iteration of work and return; the firmware owns the loop, the sample
//! interval and the logging.

pub mod consumer;
pub mod dashboard;
pub mod producer;
pub mod reentry;

pub use consumer::Consumer;
pub use producer::{CycleReport, Producer};
pub use reentry::ReentryButton;
