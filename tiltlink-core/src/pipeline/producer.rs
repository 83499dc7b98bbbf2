//! Sensor-core cycle
//!
//! read sample → compute orientation → encode → push `[roll, pitch]`

use core::fmt::{self, Write};

use heapless::String;
use tiltlink_hal::FifoTx;
use tiltlink_protocol::{encode, Orientation, WireMessage};

use crate::channel::ChannelTx;
use crate::orientation::to_orientation_with;
use crate::sample::RawSample;
use crate::traits::{ImuError, ImuSensor};

/// What one producer cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Raw sample the orientation was computed from
    pub sample: RawSample,
    /// Orientation before encoding
    pub orientation: Orientation,
    /// What was pushed to the FIFO
    pub message: WireMessage,
    /// The FIFO was full before one of the two pushes, so the producer had
    /// to wait for the consumer
    pub blocked: bool,
}

/// Room for `[R: -180.0, P: -180.0]` with margin
pub const STATUS_LEN: usize = 32;

impl CycleReport {
    /// Diagnostic line with both angles to one decimal, `[R: 1.3, P: -3.5]`
    pub fn status(&self) -> Result<String<STATUS_LEN>, fmt::Error> {
        let mut line = String::new();
        write!(
            line,
            "[R: {:.1}, P: {:.1}]",
            self.orientation.roll, self.orientation.pitch
        )?;
        Ok(line)
    }
}

/// Drives the sensor and feeds the inter-core channel
pub struct Producer<S, T> {
    sensor: S,
    tx: ChannelTx<T>,
}

impl<S: ImuSensor, T: FifoTx> Producer<S, T> {
    /// Create a producer from a sensor that has already been reset
    pub fn new(sensor: S, tx: ChannelTx<T>) -> Self {
        Self { sensor, tx }
    }

    /// Run one cycle
    ///
    /// A bus error aborts the cycle before anything is pushed, so the
    /// framing on the channel stays intact.
    pub fn cycle(&mut self) -> Result<CycleReport, ImuError> {
        let sample = self.sensor.read_sample()?;
        let orientation = to_orientation_with(&sample, self.sensor.accel_sensitivity());
        let message = encode(orientation);

        let blocked = self.tx.send(message);

        Ok(CycleReport {
            sample,
            orientation,
            message,
            blocked,
        })
    }

    /// Access the underlying sensor
    pub fn sensor(&mut self) -> &mut S {
        &mut self.sensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelRx;
    use crate::testing::{LoopbackFifo, ScriptedImu};
    use heapless::Vec;
    use tiltlink_hal::I2cBusError;

    /// Reports full before the second word of each message, as if the
    /// consumer drained a slot only after the first word landed
    #[derive(Default)]
    struct SecondWordStalls {
        pushed: Vec<u32, 8>,
    }

    impl FifoTx for SecondWordStalls {
        fn push_blocking(&mut self, word: u32) {
            self.pushed.push(word).unwrap();
        }

        fn is_ready(&self) -> bool {
            self.pushed.len() % 2 == 0
        }
    }

    #[test]
    fn test_cycle_pushes_encoded_orientation() {
        let fifo = LoopbackFifo::new();
        let imu = ScriptedImu::new(&[Ok(RawSample::from_accel(0, 16384, 0))]);
        let mut producer = Producer::new(imu, ChannelTx::new(&fifo));

        let report = producer.cycle().unwrap();

        assert_eq!(report.message, WireMessage::new(9000, 0));
        assert!(!report.blocked);

        let mut rx = ChannelRx::new(&fifo);
        assert_eq!(rx.recv(), WireMessage::new(9000, 0));
    }

    #[test]
    fn test_cycle_uses_sensor_sensitivity() {
        let fifo = LoopbackFifo::new();
        let mut imu = ScriptedImu::new(&[Ok(RawSample::from_accel(-8192, 0, 0))]);
        imu.sensitivity = 8192.0; // ±4g: 8192 counts is a full 1g
        let mut producer = Producer::new(imu, ChannelTx::new(&fifo));

        let report = producer.cycle().unwrap();

        assert_eq!(report.message.pitch, 9000);
    }

    #[test]
    fn test_bus_error_pushes_nothing() {
        let fifo = LoopbackFifo::new();
        let imu = ScriptedImu::new(&[Err(ImuError::Bus(I2cBusError::Nack))]);
        let mut producer = Producer::new(imu, ChannelTx::new(&fifo));

        let result = producer.cycle();

        assert_eq!(result, Err(ImuError::Bus(I2cBusError::Nack)));
        assert_eq!(fifo.len(), 0);
    }

    #[test]
    fn test_four_messages_fill_the_fifo() {
        let fifo = LoopbackFifo::new();
        let imu = ScriptedImu::new(&[
            Ok(RawSample::from_accel(0, 0, 16384)),
            Ok(RawSample::from_accel(0, 0, 16384)),
            Ok(RawSample::from_accel(0, 0, 16384)),
            Ok(RawSample::from_accel(0, 0, 16384)),
        ]);
        let mut producer = Producer::new(imu, ChannelTx::new(&fifo));

        for _ in 0..4 {
            assert!(!producer.cycle().unwrap().blocked);
        }
        assert_eq!(fifo.len(), 8);
        assert!(!(&fifo).is_ready());
    }

    #[test]
    fn test_wait_on_pitch_word_is_reported() {
        let imu = ScriptedImu::new(&[Ok(RawSample::from_accel(0, 0, 16384))]);
        let mut producer = Producer::new(imu, ChannelTx::new(SecondWordStalls::default()));

        let report = producer.cycle().unwrap();

        assert!(report.blocked);
    }

    #[test]
    fn test_status_line_has_one_decimal() {
        let orientation = Orientation::new(1.26, -3.54);
        let report = CycleReport {
            sample: RawSample::from_accel(0, 0, 16384),
            orientation,
            message: encode(orientation),
            blocked: false,
        };

        assert_eq!(report.status().unwrap().as_str(), "[R: 1.3, P: -3.5]");
    }
}
