//! Host test doubles for the pipeline traits

use core::cell::RefCell;

use heapless::{Deque, String, Vec};
use tiltlink_hal::{FifoRx, FifoTx, OutputPin};

use crate::sample::RawSample;
use crate::traits::{DisplayError, DisplaySurface, ImuError, ImuSensor};

/// Same depth as the RP2040 SIO FIFO
pub const LOOPBACK_DEPTH: usize = 8;

/// Single-threaded FIFO where both ends live in the same test
///
/// There is no other core to unblock a full push or an empty pop, so either
/// of those panics instead of hanging the test.
pub struct LoopbackFifo {
    words: RefCell<Deque<u32, LOOPBACK_DEPTH>>,
}

impl LoopbackFifo {
    pub fn new() -> Self {
        Self {
            words: RefCell::new(Deque::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.words.borrow().len()
    }
}

impl FifoTx for &LoopbackFifo {
    fn push_blocking(&mut self, word: u32) {
        self.words
            .borrow_mut()
            .push_back(word)
            .expect("loopback FIFO full: push would block forever");
    }

    fn is_ready(&self) -> bool {
        !self.words.borrow().is_full()
    }
}

impl FifoRx for &LoopbackFifo {
    fn pop_blocking(&mut self) -> u32 {
        self.words
            .borrow_mut()
            .pop_front()
            .expect("loopback FIFO empty: pop would block forever")
    }

    fn has_data(&self) -> bool {
        !self.words.borrow().is_empty()
    }
}

/// IMU that replays a fixed list of readings
pub struct ScriptedImu {
    readings: Deque<Result<RawSample, ImuError>, 8>,
    pub sensitivity: f32,
}

impl ScriptedImu {
    pub fn new(readings: &[Result<RawSample, ImuError>]) -> Self {
        let mut queue = Deque::new();
        for reading in readings {
            queue.push_back(*reading).expect("too many scripted readings");
        }
        Self {
            readings: queue,
            sensitivity: crate::orientation::ACCEL_SENSITIVITY_2G,
        }
    }
}

impl ImuSensor for ScriptedImu {
    fn read_sample(&mut self) -> Result<RawSample, ImuError> {
        self.readings
            .pop_front()
            .expect("scripted IMU ran out of readings")
    }

    fn accel_sensitivity(&self) -> f32 {
        self.sensitivity
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Text(String<24>, i32, i32),
    Line(i32, i32, i32, i32),
    Flush,
}

/// Display that records every call
pub struct RecordingDisplay {
    pub ops: Vec<DrawOp, 32>,
    pub fail_flush: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_flush: false,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, i32, i32)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(text, x, y) => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    pub fn text_at(&self, x: i32, y: i32) -> Option<&str> {
        self.texts()
            .find(|(_, tx, ty)| *tx == x && *ty == y)
            .map(|(text, _, _)| text)
    }
}

impl DisplaySurface for RecordingDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.clear();
        self.ops
            .push(DrawOp::Clear)
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        let mut owned = String::new();
        owned
            .push_str(text)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.ops
            .push(DrawOp::Text(owned, x, y))
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        self.ops
            .push(DrawOp::Line(x0, y0, x1, y1))
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Communication);
        }
        self.ops
            .push(DrawOp::Flush)
            .map_err(|_| DisplayError::BufferOverflow)
    }
}

/// Output pin that counts toggles
#[derive(Default)]
pub struct FakeLed {
    pub high: bool,
    pub toggles: u32,
}

impl OutputPin for FakeLed {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.high = !self.high;
        self.toggles += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
