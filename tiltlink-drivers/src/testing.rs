//! Host test doubles for the bus and delay traits

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use tiltlink_hal::{I2cBus, I2cBusError};

/// Largest single write a driver issues (one display page plus prefix)
pub const MAX_WRITE: usize = 136;

/// One recorded bus transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Write(u8, Vec<u8, MAX_WRITE>),
    WriteRead(u8, u8, usize),
}

/// I2C device model with a flat register file
///
/// A write of `[reg, data...]` stores `data` starting at `reg`. A
/// `write_read` of `[reg]` returns consecutive registers starting at `reg`,
/// like the auto-incrementing register pointer on real parts.
pub struct MockBus {
    pub registers: [u8; 256],
    pub transfers: Vec<Transfer, 32>,
    pub fail_with: Option<I2cBusError>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            transfers: Vec::new(),
            fail_with: None,
        }
    }

    /// Recorded writes, skipping reads
    pub fn writes(&self) -> impl Iterator<Item = &[u8]> {
        self.transfers.iter().filter_map(|t| match t {
            Transfer::Write(_, data) => Some(data.as_slice()),
            _ => None,
        })
    }
}

impl I2cBus for MockBus {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        if let Some((&reg, payload)) = data.split_first() {
            for (i, &byte) in payload.iter().enumerate() {
                self.registers[(reg as usize + i) % 256] = byte;
            }
        }
        let recorded = Vec::from_slice(data).expect("write larger than MAX_WRITE");
        self.transfers
            .push(Transfer::Write(address, recorded))
            .expect("too many transfers");
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        buf.fill(0);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        let reg = write_data[0];
        for (i, byte) in read_buf.iter_mut().enumerate() {
            *byte = self.registers[(reg as usize + i) % 256];
        }
        self.transfers
            .push(Transfer::WriteRead(address, reg, read_buf.len()))
            .expect("too many transfers");
        Ok(())
    }
}

/// Delay that records every millisecond wait instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32, 8>,
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms).expect("too many delays");
        self.total_ns += ms as u64 * 1_000_000;
    }
}
